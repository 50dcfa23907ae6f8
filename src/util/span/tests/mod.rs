//! Span 单元测试
//!
//! 测试源位置跟踪的 Position 和 SourceFile

use crate::util::span::{Position, SourceFile};

mod position_tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(1, 5);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 5);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_position_dummy() {
        let pos = Position::dummy();
        assert!(pos.is_dummy());
        assert!(!Position::new(1, 1).is_dummy());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(10, 20).to_string(), "10:20");
    }
}

mod source_file_tests {
    use super::*;

    #[test]
    fn test_line_text() {
        let file = SourceFile::new("t.py", "if 1:\r\n    x = 2\nprint(x)");
        assert_eq!(file.line_text(1), Some("if 1:"));
        assert_eq!(file.line_text(2), Some("    x = 2"));
        assert_eq!(file.line_text(3), Some("print(x)"));
        assert_eq!(file.line_text(4), None);
        assert_eq!(file.line_text(0), None);
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(SourceFile::new("<stdin>", "").to_string(), "<stdin>");
    }
}
