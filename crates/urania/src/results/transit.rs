use crate::request::TransitTarget;
use crate::results::RequestContext;
use crate::symbols::Body;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// The moment a transit search resolved to
#[derive(Debug, Clone, PartialEq)]
pub struct TransitMoment {
    context: RequestContext,
    body: Body,
    target: TransitTarget,
    offset: f64,
    backwards: bool,
    julian_day: f64,
    event: DateTime<Utc>,
}

impl TransitMoment {
    pub fn new(
        context: RequestContext,
        body: Body,
        target: TransitTarget,
        offset: f64,
        backwards: bool,
        julian_day: f64,
        event: DateTime<Utc>,
    ) -> Self {
        Self {
            context,
            body,
            target,
            offset,
            backwards,
            julian_day,
            event,
        }
    }

    /// Request parameters; the context event is where the search started
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    pub fn body(&self) -> Body {
        self.body
    }

    pub fn target(&self) -> TransitTarget {
        self.target
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_backwards(&self) -> bool {
        self.backwards
    }

    /// Julian Day (UT) of the transit
    pub fn julian_day(&self) -> f64 {
        self.julian_day
    }

    /// Transit time, Universal Time
    pub fn event(&self) -> DateTime<Utc> {
        self.event
    }
}

impl fmt::Display for TransitMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.event.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
