use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// The player needs at least one track to bind to.
    #[error("playlist is empty")]
    EmptyPlaylist,
}
