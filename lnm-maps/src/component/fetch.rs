use lnm_maps_core::model::{form::FormFieldName, route::PathRequest};

/// identifies one route request issued by the component. completions
/// carrying any other ticket than the outstanding one are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(pub u64);

impl std::fmt::Display for FetchTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// a route request the host must run against the path service
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCommand {
    pub ticket: FetchTicket,
    pub request: PathRequest,
}

/// result of pressing submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// validation failed; errors are stored on the form
    Invalid,
    /// a request is already outstanding
    Busy(FetchTicket),
    /// these fields do not name a known place; nothing was requested
    Unresolved(Vec<FormFieldName>),
    /// a new route request was issued
    Fetch(FetchCommand),
}
