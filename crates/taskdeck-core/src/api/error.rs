/// Failure of a single gateway round trip. `Unauthorized` is split out
/// because the collection load path keys session invalidation off it.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not authorized")]
    Unauthorized,

    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}
