#[cfg(test)]
mod tests {
    use bstr::BStr;

    use crate::toolchain::diagnostics::CollectingDiagnosticConsumer;
    use crate::toolchain::diagnostics::Diagnostic;
    use crate::toolchain::diagnostics::DiagnosticConsumer;
    use crate::toolchain::diagnostics::DiagnosticKind;
    use crate::toolchain::diagnostics::DiagnosticLevel;
    use crate::toolchain::diagnostics::DiagnosticLocation;
    use crate::toolchain::diagnostics::DiagnosticMessage;
    use crate::toolchain::diagnostics::LexerDiagnosticKind;
    use crate::toolchain::diagnostics::StreamDiagnosticConsumer;

    const UNKNOWN: DiagnosticKind =
        DiagnosticKind::LexerError { kind: LexerDiagnosticKind::UnknownCharacter };

    fn location<'s>(line_number: u32, column_number: u32, line: &'s str) -> DiagnosticLocation<'s> {
        DiagnosticLocation { file_name: "t.c", line_number, column_number, line: BStr::new(line) }
    }

    fn message<'s>(location: DiagnosticLocation<'s>, body: &str) -> DiagnosticMessage<'s> {
        DiagnosticMessage { kind: UNKNOWN, location, body: body.to_string() }
    }

    #[test]
    fn location_leaves_out_unknown_positions() {
        assert_eq!(location(2, 3, "").to_string(), "t.c:2:3");
        assert_eq!(location(2, 0, "").to_string(), "t.c:2");
        assert_eq!(location(0, 0, "").to_string(), "t.c");
    }

    #[test]
    fn diagnostic_with_excerpt() {
        let diag = Diagnostic::new(
            DiagnosticLevel::Warning,
            message(location(2, 3, "  @x"), "Unrecognized character sequence '@' skipped."),
            vec![],
        );
        assert_eq!(
            diag.to_string(),
            "t.c:2:3: WARNING: Unrecognized character sequence '@' skipped.\n      @x\n      ^\n"
        );
    }

    #[test]
    fn excerpt_caret_follows_tabs() {
        let diag =
            Diagnostic::new(DiagnosticLevel::Error, message(location(1, 3, "\t @"), "bad"), vec![]);
        assert_eq!(diag.to_string(), "t.c:1:3: ERROR: bad\n    \t @\n    \t ^\n");
    }

    #[test]
    fn diagnostic_without_excerpt_and_with_notes() {
        let diag = Diagnostic::new(
            DiagnosticLevel::Warning,
            message(location(1, 0, "/* open"), "Block comment is missing its closing '*/'."),
            vec![message(location(3, 5, "tail"), "comment closed by the end of input here")],
        );
        assert_eq!(
            diag.to_string(),
            "t.c:1: WARNING: Block comment is missing its closing '*/'.\n\
             t.c:3:5: NOTE: comment closed by the end of input here\n"
        );
    }

    #[test]
    fn stream_consumer_writes_diagnostics() {
        let mut out: Vec<u8> = Vec::new();
        {
            let mut consumer = StreamDiagnosticConsumer::new(&mut out);
            let first =
                Diagnostic::new(DiagnosticLevel::Note, message(location(1, 1, ""), "one"), vec![]);
            let second = Diagnostic::new(
                DiagnosticLevel::Warning,
                message(location(0, 0, ""), "two"),
                vec![],
            );
            consumer.handle_diagnostic(&first);
            consumer.handle_diagnostic(&second);
            consumer.flush();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "t.c:1:1: NOTE: one\nt.c: WARNING: two\n");
    }

    #[test]
    fn collecting_consumer_counts_levels() {
        let mut consumer = CollectingDiagnosticConsumer::new();
        for level in [DiagnosticLevel::Warning, DiagnosticLevel::Error, DiagnosticLevel::Warning] {
            let diag = Diagnostic::new(
                level,
                message(location(4, 2, "x@"), "body"),
                vec![message(location(4, 3, "x@"), "note")],
            );
            consumer.handle_diagnostic(&diag);
        }
        assert_eq!(consumer.count(DiagnosticLevel::Warning), 2);
        assert_eq!(consumer.count(DiagnosticLevel::Error), 1);
        assert_eq!(consumer.count(DiagnosticLevel::Note), 0);

        let collected = &consumer.diagnostics()[1];
        assert_eq!(collected.level, DiagnosticLevel::Error);
        assert_eq!(collected.kind, UNKNOWN);
        assert_eq!((collected.line_number, collected.column_number), (4, 2));
        assert_eq!(collected.body, "body");
        assert_eq!(collected.notes, vec!["t.c:4:3: note"]);
    }

    #[test]
    fn kind_names() {
        assert_eq!(LexerDiagnosticKind::UnknownCharacter.to_string(), "unknown character");
        assert_eq!(LexerDiagnosticKind::InvalidEncoding.to_string(), "invalid encoding");
        assert_eq!(
            LexerDiagnosticKind::UnterminatedBlockComment.to_string(),
            "unterminated block comment"
        );
        assert_eq!(LexerDiagnosticKind::UnterminatedLiteral.to_string(), "unterminated literal");
        assert_eq!(UNKNOWN.to_string(), "unknown character");
    }
}
