//! Interaction controller for the redaction editor
//!
//! One [`Controller`] lives for one page load. It owns the page model and
//! routes user events to the components:
//! - preview round trip and modal ([`preview`])
//! - custom-input visibility ([`toggle`])
//! - group bulk-apply ([`group`])
//! - inline single-term edits ([`inline_edit`])
//! - ad-hoc term slots ([`term_adder`])

pub mod commands;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod group;
pub mod host;
pub mod inline_edit;
pub mod preview;
pub mod term_adder;
pub mod toggle;

pub use commands::{CommandArgs, CommandRegistry};
pub use controller::{Controller, DispatchOutcome};
pub use dispatch::{DispatchTable, Event, EventKind, Handler};
pub use error::{ControllerError, Result};
pub use host::Host;
pub use inline_edit::InlineEditOutcome;
pub use preview::PreviewOutcome;
pub use term_adder::{SlotId, TermAdder};
