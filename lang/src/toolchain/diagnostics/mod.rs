//! Tools for the production and management of diagnostic feedback from the toolchain.
//!
//! The lexer never writes to the terminal itself. It builds a [Diagnostic] describing what it
//! found and where, and hands it to a [DiagnosticConsumer], which decides how to deliver it. The
//! command-line driver streams diagnostics to stderr while tests collect them for inspection.
//!
//! Later stages locate diagnostics by token index through a [DiagnosticLocationTranslator],
//! which the [crate::toolchain::lexer::TokenizedBuffer] implements once lexing is complete.
//!

pub mod diagnostic_emitter;
pub mod diagnostic_kind;

mod diagnostic_emitter_unittests;

pub use diagnostic_emitter::CollectedDiagnostic;
pub use diagnostic_emitter::CollectingDiagnosticConsumer;
pub use diagnostic_emitter::Diagnostic;
pub use diagnostic_emitter::DiagnosticConsumer;
pub use diagnostic_emitter::DiagnosticLevel;
pub use diagnostic_emitter::DiagnosticLocation;
pub use diagnostic_emitter::DiagnosticLocationTranslator;
pub use diagnostic_emitter::DiagnosticMessage;
pub use diagnostic_emitter::NullDiagnosticConsumer;
pub use diagnostic_emitter::StreamDiagnosticConsumer;
pub use diagnostic_kind::DiagnosticKind;
pub use diagnostic_kind::LexerDiagnosticKind;
