pub mod form;
pub mod permission;
pub mod state;

pub use form::engine;
pub use form::event;
pub use form::field;
pub use form::validators;

pub use permission::dashboard;
pub use permission::demo;
pub use permission::status;

pub use state::focus;
