use thiserror::Error;

/// Fatal data errors for a run. Transport failures are not wrapped here: a
/// network error from the client propagates as-is and ends the run, exactly
/// like every variant below. The zero-match case is deliberately absent;
/// matching nothing is a handled outcome, not an error.
#[derive(Error, Debug)]
pub enum RankError {
    /// Body was not JSON, or was JSON but not a non-empty object of the
    /// expected shape. Malformed and empty are one case on purpose.
    #[error("Error with JSON decoding or Empty data")]
    Decode,

    #[error("organicResults is empty")]
    NoResults,
}
