use datasieve_types::{Payload, SieveResponse};

/// A submission dispatched to the network worker.
pub(crate) struct SubmitJob {
    pub generation: u64,
    pub payload: Payload,
}

/// Worker result, tagged with the generation it answers. The form drops
/// outcomes whose generation is older than the latest issued submission.
pub(crate) struct SubmitOutcome {
    pub generation: u64,
    pub result: Result<SieveResponse, datasieve_client::Error>,
}
