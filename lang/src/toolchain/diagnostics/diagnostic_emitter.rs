use std::fmt;
use std::io::Write;

use bstr::BStr;

use super::DiagnosticKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Note,
    Warning,
    Error,
}

impl DiagnosticLevel {
    fn infix(&self) -> &'static str {
        match self {
            DiagnosticLevel::Note => "NOTE: ",
            DiagnosticLevel::Warning => "WARNING: ",
            DiagnosticLevel::Error => "ERROR: ",
        }
    }
}

/// A location in code referred to by the diagnostic.
///
/// Line and column numbers are 1-based. A zero means the position is unknown and is left out of
/// the printed location.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticLocation<'s> {
    pub file_name: &'s str,
    pub line_number: u32,
    pub column_number: u32,

    /// Text of the referenced source line without its line terminator, possibly empty.
    pub line: &'s BStr,
}

impl<'s> fmt::Display for DiagnosticLocation<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name)?;
        if self.line_number > 0 {
            f.write_fmt(format_args!(":{}", self.line_number))?;
        }
        if self.column_number > 0 {
            f.write_fmt(format_args!(":{}", self.column_number))?;
        }
        fmt::Result::Ok(())
    }
}

impl<'s> DiagnosticLocation<'s> {
    // Prints the source line followed by a caret under the referenced column. Tabs in the source
    // line are repeated in the caret line so the caret lines up in a terminal.
    fn write_excerpt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line.is_empty() || self.column_number == 0 {
            return fmt::Result::Ok(());
        }
        let text = self.line.to_string();
        let padding: String = text
            .chars()
            .take(self.column_number as usize - 1)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        f.write_fmt(format_args!("    {}\n    {}^\n", text, padding))
    }
}

pub struct DiagnosticMessage<'s> {
    pub kind: DiagnosticKind,
    pub location: DiagnosticLocation<'s>,
    pub body: String,
}

impl<'s> fmt::Display for DiagnosticMessage<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}: {}", self.location, self.body))
    }
}

/// A complete Diagnostic, including a main message and optional notes, plus the level.
pub struct Diagnostic<'s> {
    pub level: DiagnosticLevel,
    pub message: DiagnosticMessage<'s>,
    pub notes: Vec<DiagnosticMessage<'s>>,
}

impl<'s> Diagnostic<'s> {
    pub fn new(
        level: DiagnosticLevel,
        message: DiagnosticMessage<'s>,
        notes: Vec<DiagnosticMessage<'s>>,
    ) -> Diagnostic<'s> {
        Diagnostic { level, message, notes }
    }
}

impl<'s> fmt::Display for Diagnostic<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "{}: {}{}\n",
            self.message.location,
            self.level.infix(),
            self.message.body
        ))?;
        self.message.location.write_excerpt(f)?;
        for note in &self.notes {
            f.write_fmt(format_args!(
                "{}: {}{}\n",
                note.location,
                DiagnosticLevel::Note.infix(),
                note.body
            ))?;
        }
        fmt::Result::Ok(())
    }
}

/// An interface for an object that can receive diagnostics from the toolchain as they are emitted.
pub trait DiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: &Diagnostic<'_>);
    fn flush(&mut self);
}

/// Translates a domain-specific location, such as a token index, into a [DiagnosticLocation].
pub trait DiagnosticLocationTranslator<'s, LocationT> {
    fn get_location(&self, loc: &LocationT) -> DiagnosticLocation<'s>;
}

/// Writes every diagnostic to a buffered output stream.
pub struct StreamDiagnosticConsumer<W: std::io::Write> {
    stream: std::io::BufWriter<W>,
}

impl<W: std::io::Write> StreamDiagnosticConsumer<W> {
    pub fn new(stream: W) -> StreamDiagnosticConsumer<W> {
        StreamDiagnosticConsumer { stream: std::io::BufWriter::new(stream) }
    }
}

impl<W: std::io::Write> DiagnosticConsumer for StreamDiagnosticConsumer<W> {
    // A diagnostic stream that can't be written to has nowhere left to report that failure.
    fn handle_diagnostic(&mut self, diag: &Diagnostic<'_>) {
        let _ = self.stream.write_fmt(format_args!("{}", diag));
    }

    fn flush(&mut self) {
        let _ = self.stream.flush();
    }
}

pub fn console_diagnostic_consumer() -> StreamDiagnosticConsumer<std::io::Stderr> {
    StreamDiagnosticConsumer::new(std::io::stderr())
}

/// Discards all diagnostics.
pub struct NullDiagnosticConsumer {}

impl DiagnosticConsumer for NullDiagnosticConsumer {
    fn handle_diagnostic(&mut self, _diag: &Diagnostic<'_>) {}
    fn flush(&mut self) {}
}

/// An owned summary of a [Diagnostic], retained after the source it refers to is gone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectedDiagnostic {
    pub level: DiagnosticLevel,
    pub kind: DiagnosticKind,
    pub line_number: u32,
    pub column_number: u32,
    pub body: String,
    pub notes: Vec<String>,
}

/// Records every diagnostic it receives, then forwards it to an inner consumer.
pub struct CollectingDiagnosticConsumer<C: DiagnosticConsumer = NullDiagnosticConsumer> {
    inner: C,
    collected: Vec<CollectedDiagnostic>,
}

impl CollectingDiagnosticConsumer<NullDiagnosticConsumer> {
    pub fn new() -> CollectingDiagnosticConsumer<NullDiagnosticConsumer> {
        CollectingDiagnosticConsumer::forwarding(NullDiagnosticConsumer {})
    }
}

impl Default for CollectingDiagnosticConsumer<NullDiagnosticConsumer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DiagnosticConsumer> CollectingDiagnosticConsumer<C> {
    pub fn forwarding(inner: C) -> CollectingDiagnosticConsumer<C> {
        CollectingDiagnosticConsumer { inner, collected: Vec::new() }
    }

    pub fn diagnostics(&self) -> &[CollectedDiagnostic] {
        &self.collected
    }

    /// Number of collected diagnostics at exactly `level`.
    pub fn count(&self, level: DiagnosticLevel) -> usize {
        self.collected.iter().filter(|d| d.level == level).count()
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: DiagnosticConsumer> DiagnosticConsumer for CollectingDiagnosticConsumer<C> {
    fn handle_diagnostic(&mut self, diag: &Diagnostic<'_>) {
        self.collected.push(CollectedDiagnostic {
            level: diag.level,
            kind: diag.message.kind,
            line_number: diag.message.location.line_number,
            column_number: diag.message.location.column_number,
            body: diag.message.body.clone(),
            notes: diag.notes.iter().map(|note| note.to_string()).collect(),
        });
        self.inner.handle_diagnostic(diag);
    }

    fn flush(&mut self) {
        self.inner.flush();
    }
}
