//! # TUI Components
//!
//! One file per piece of the form:
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── form_title.rs    (Heading)
//! ├── prompt_input/    (Required text field with cursor editing)
//! ├── submit_button.rs (Submit / Submitting..., disabled while loading)
//! └── message_area.rs  (Error in red, response in green)
//! ```
//!
//! Stateless components (`FormTitle`, `SubmitButton`, `MessageArea`) are built
//! fresh each frame from props. `PromptInput` is stateful: it owns its text
//! buffer and cursor, and emits `InputEvent`s the loop turns into actions.

pub mod form_title;
pub mod message_area;
pub mod prompt_input;
pub mod submit_button;

pub use form_title::FormTitle;
pub use message_area::MessageArea;
pub use prompt_input::{InputEvent, PromptInput};
pub use submit_button::SubmitButton;
