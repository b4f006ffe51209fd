mod common;

use common::{event, init_logging, new_york, LinearEphemeris};
use urania::{
    Ayanamsa, Body, CalculationFlags, Coordinates, PlanetBuilder, RequestError, SymbolCategory,
    ToDocument, ZodiacMode,
};

#[test]
fn test_sun_and_moon_geocentric_tropical() {
    let engine = LinearEphemeris::new();
    let positions = PlanetBuilder::new(&engine, event())
        .bodies("Sun,Moon")
        .build()
        .unwrap();

    let names: Vec<&str> = positions.names().collect();
    assert_eq!(names, vec!["Sun", "Moon"]);

    let document = positions.to_document();
    let planets = document["planets"].as_object().unwrap();
    assert_eq!(planets.len(), 2);
    for name in ["Sun", "Moon"] {
        assert_eq!(planets[name].as_array().unwrap().len(), 2);
    }

    assert_eq!(positions.context().zodiac(), ZodiacMode::Tropical);
    assert!(!positions.context().is_topocentric());
    assert!(positions.context().observer().is_none());
    for call in engine.position_calls.borrow().iter() {
        assert_eq!(call.config.observer, None);
        assert!(!call.config.flags.is_topocentric());
    }
}

#[test]
fn test_default_selection_is_all_bodies() {
    let engine = LinearEphemeris::new();
    let positions = PlanetBuilder::new(&engine, event()).build().unwrap();

    assert_eq!(positions.len(), 13);
    let names: Vec<&str> = positions.names().collect();
    assert_eq!(names.first(), Some(&"Sun"));
    assert!(names.contains(&"Chiron"));
    assert!(names.contains(&"Lilith"));
    assert!(names.contains(&"NNode"));
}

#[test]
fn test_all_bodies_replaces_selection() {
    let engine = LinearEphemeris::new();
    let positions = PlanetBuilder::new(&engine, event())
        .bodies("Mars")
        .all_bodies()
        .build()
        .unwrap();
    assert_eq!(positions.len(), Body::ALL.len());
}

#[test]
fn test_later_bodies_call_wins() {
    let engine = LinearEphemeris::new();
    let positions = PlanetBuilder::new(&engine, event())
        .bodies("Sun,Moon")
        .bodies("Venus")
        .build()
        .unwrap();
    let names: Vec<&str> = positions.names().collect();
    assert_eq!(names, vec!["Venus"]);
}

#[test]
fn test_unknown_body_fails_before_engine_call() {
    let engine = LinearEphemeris::new();
    let result = PlanetBuilder::new(&engine, event())
        .bodies("Sun,Xyz,Moon")
        .build();

    match result {
        Err(RequestError::UnknownSymbol { name, category }) => {
            assert_eq!(name, "Xyz");
            assert_eq!(category, SymbolCategory::Body);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(engine.position_calls.borrow().is_empty());
}

#[test]
fn test_unknown_zodiac_fails() {
    let engine = LinearEphemeris::new();
    let result = PlanetBuilder::new(&engine, event()).zodiac("Lahri").build();
    assert!(matches!(
        result,
        Err(RequestError::UnknownSymbol {
            category: SymbolCategory::Ayanamsa,
            ..
        })
    ));
}

#[test]
fn test_topocentric_sidereal() {
    let engine = LinearEphemeris::new();
    let observer = new_york();
    let positions = PlanetBuilder::new(&engine, event())
        .bodies("Sun")
        .observer_at(observer)
        .zodiac("Lahiri")
        .build()
        .unwrap();

    let calls = engine.position_calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].config.observer, Some(observer));
    assert_eq!(
        calls[0].config.flags.decode(),
        (ZodiacMode::Sidereal(Ayanamsa::Lahiri), true)
    );

    assert_eq!(positions.context().observer(), Some(&observer));
    assert!(positions.context().is_topocentric());
    let expected = LinearEphemeris::longitude(Body::Sun, calls[0].jd, &calls[0].config);
    assert_eq!(positions.longitude("Sun"), Some(expected));
}

#[test]
fn test_non_finite_observer_rejected() {
    let engine = LinearEphemeris::new();
    let result = PlanetBuilder::new(&engine, event())
        .observer_at(Coordinates::new(f64::NAN, 0.0, 0.0))
        .build();
    assert!(matches!(
        result,
        Err(RequestError::InvalidOption {
            option: "coordinates",
            ..
        })
    ));
}

#[test]
fn test_retrograde_node() {
    let engine = LinearEphemeris::new();
    let positions = PlanetBuilder::new(&engine, event())
        .bodies("NNode,Sun")
        .build()
        .unwrap();
    assert_eq!(positions.is_retrograde("NNode"), Some(true));
    assert_eq!(positions.is_retrograde("Sun"), Some(false));
    assert_eq!(positions.is_retrograde("Moon"), None);
}

#[test]
fn test_engine_flag_mismatch_is_a_warning() {
    init_logging();
    let engine = LinearEphemeris {
        reported_flags: Some(CalculationFlags::encode(ZodiacMode::Tropical, false, false)),
        ..LinearEphemeris::new()
    };
    let positions = PlanetBuilder::new(&engine, event())
        .bodies("Sun,Moon")
        .zodiac("Raman")
        .build()
        .unwrap();

    // computation proceeds with the engine's output
    assert_eq!(positions.len(), 2);
    let warnings = positions.warnings();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].body, Body::Sun);
    assert_eq!(warnings[0].requested.zodiac(), ZodiacMode::Sidereal(Ayanamsa::Raman));
    assert_eq!(warnings[0].actual.zodiac(), ZodiacMode::Tropical);
}

#[test]
fn test_no_warnings_when_flags_match() {
    let engine = LinearEphemeris::new();
    let positions = PlanetBuilder::new(&engine, event()).build().unwrap();
    assert!(positions.warnings().is_empty());
}

#[test]
fn test_text_representation() {
    let engine = LinearEphemeris::new();
    let positions = PlanetBuilder::new(&engine, event())
        .bodies("Sun,Lilith")
        .build()
        .unwrap();
    let text = positions.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Sun"));
    assert!(lines[1].starts_with("Lilith"));
}
