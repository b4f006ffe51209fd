use urania::flags::{DEFAULT_ENGINE_FLAGS, FLAG_TOPOCENTRIC, FLAG_TRANSIT_LONGITUDE};
use urania::{Ayanamsa, CalculationFlags, ZodiacMode};

fn all_zodiacs() -> Vec<ZodiacMode> {
    let mut modes = vec![ZodiacMode::Tropical];
    modes.extend(Ayanamsa::ALL.iter().map(|a| ZodiacMode::Sidereal(*a)));
    modes
}

#[test]
fn test_round_trip() {
    for zodiac in all_zodiacs() {
        for topocentric in [false, true] {
            for transit in [false, true] {
                let flags = CalculationFlags::encode(zodiac, topocentric, transit);
                assert_eq!(flags.decode(), (zodiac, topocentric), "{:#x}", flags.bits());
                assert_eq!(flags.is_transit_search(), transit);
                // survives a trip through the raw integer
                assert_eq!(CalculationFlags::from_bits(flags.bits()).decode(), (zodiac, topocentric));
            }
        }
    }
}

#[test]
fn test_default_engine_bits_always_set() {
    for zodiac in all_zodiacs() {
        let flags = CalculationFlags::encode(zodiac, false, false);
        assert_eq!(flags.bits() & DEFAULT_ENGINE_FLAGS, DEFAULT_ENGINE_FLAGS);
    }
}

#[test]
fn test_topocentric_bit_only_when_requested() {
    let geo = CalculationFlags::encode(ZodiacMode::Tropical, false, false);
    let topo = CalculationFlags::encode(ZodiacMode::Tropical, true, false);
    assert_eq!(geo.bits() & FLAG_TOPOCENTRIC, 0);
    assert_eq!(topo.bits() & FLAG_TOPOCENTRIC, FLAG_TOPOCENTRIC);
}

#[test]
fn test_fagan_bradley_is_not_tropical() {
    // ayanamsa id 0 is told apart from tropical by the sidereal bit alone
    let flags = CalculationFlags::encode(ZodiacMode::Sidereal(Ayanamsa::FaganBradley), false, false);
    assert!(flags.is_sidereal());
    assert_eq!(flags.zodiac(), ZodiacMode::Sidereal(Ayanamsa::FaganBradley));
    assert_ne!(flags, CalculationFlags::default());
}

#[test]
fn test_without_transit_search() {
    let flags = CalculationFlags::encode(ZodiacMode::Sidereal(Ayanamsa::Lahiri), true, true);
    let lookup = flags.without_transit_search();
    assert_eq!(lookup.bits() & FLAG_TRANSIT_LONGITUDE, 0);
    assert_eq!(lookup.decode(), flags.decode());
}
