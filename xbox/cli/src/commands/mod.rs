mod content;
mod content_key;
mod non_roamable;
mod roamable;
mod save_id;

pub use self::content::ContentCommand;
pub use self::content_key::ContentKeyCommand;
pub use self::non_roamable::NonRoamableCommand;
pub use self::roamable::RoamableCommand;
pub use self::save_id::SaveIdCommand;
