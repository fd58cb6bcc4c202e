//! Player core: playlist state, the per-track binding to a media handle,
//! and the transport operations driven by the UI.

mod binding;
mod error;
mod model;
mod state;
mod time;

pub use binding::{Binding, BindingPhase};
pub use error::PlayerError;
pub use model::Player;
pub use state::{DEFAULT_VOLUME, PlayIntent, PlaylistState, VolumeIcon};
pub use time::{Progress, format_time};
