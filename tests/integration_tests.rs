//! Integration tests for texfrag fragment rendering

use pretty_assertions::assert_eq;
use texfrag::{
    display_caption, escape_latex, escaped_label, render_figure, render_table,
    render_table_from_frame, render_table_with_options, row, Error, Row, TableOptions,
    TabularData, Value, DEFAULT_IMAGE_WIDTH,
};

fn count_x_tokens(latex: &str) -> usize {
    let marker = "\\begin{tabularx}{\\textwidth}{";
    let start = latex.find(marker).expect("no tabularx") + marker.len();
    let end = start + latex[start..].find('}').expect("unterminated column list");
    latex[start..end]
        .split_whitespace()
        .filter(|t| *t == "X")
        .count()
}

// ============================================================================
// Escaping
// ============================================================================

mod escaping {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_documented_example() {
        assert_eq!(escape_latex("a_b&c"), "a\\_b\\&c");
    }

    #[test]
    fn test_each_character_escaped_once() {
        let input = "\\{}";
        assert_eq!(escape_latex(input), "\\textbackslash{}\\{\\}");
    }

    #[test]
    fn test_not_idempotent() {
        let samples = ["50% of $x$", "a\\b", "x^2 ~ y"];
        for s in samples {
            let once = escape_latex(s);
            assert_ne!(escape_latex(&once), once, "input: {:?}", s);
        }
    }

    #[test]
    fn test_replacement_count_matches_specials() {
        let input = "&%$#_{}~^\\[]";
        let escaped = escape_latex(input);
        // 12 specials in, 12 commands out
        assert_eq!(escaped.matches('\\').count(), 12);
    }
}

// ============================================================================
// Caption and label normalization
// ============================================================================

mod normalization {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_caption() {
        assert_eq!(display_caption("cpu_load"), "Cpu Load");
        assert_eq!(display_caption("Network_IO_rate"), "Network Io Rate");
    }

    #[test]
    fn test_label() {
        assert_eq!(escaped_label("cpu load"), "cpu\\_load");
    }
}

// ============================================================================
// Explicit-column tables
// ============================================================================

mod tables {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_rows() -> Vec<Row> {
        vec![
            row! { "Name" => "alice", "Score" => 91 },
            row! { "Name" => "bob", "Score" => 78 },
        ]
    }

    #[test]
    fn test_one_midrule_between_two_rows() {
        let latex = render_table(&two_rows(), "scores", "scores", &["Name", "Score"]).unwrap();
        assert_eq!(latex.matches("\\midrule").count(), 1);

        let lines: Vec<&str> = latex.lines().collect();
        let alice = lines.iter().position(|l| *l == "alice & 91 \\\\").unwrap();
        assert_eq!(lines[alice + 1], "\\midrule");
        assert_eq!(lines[alice + 2], "bob & 78 \\\\");
        assert_eq!(lines[alice + 3], "");
        assert_eq!(lines[alice + 4], "\\end{tabularx}");
    }

    #[test]
    fn test_header_and_environment() {
        let latex = render_table(&two_rows(), "exam_scores", "exam scores", &["Name", "Score"])
            .unwrap();
        assert!(latex.contains("\\begin{table}[H]\n\\centering\n\\small\n"));
        assert!(latex.contains("\\caption{Exam Scores}"));
        assert!(latex.contains("\\label{tab:exam\\_scores}"));
        assert!(latex.contains("\\begin{tabularx}{\\textwidth}{ X X }"));
        assert!(latex.contains("\\textbf{Name} & \\textbf{Score} \\\\\n\\toprule[0.5pt]\n"));
        assert!(latex.ends_with("\\end{tabularx}\n\\end{table}\n"));
    }

    #[test]
    fn test_many_rows() {
        let rows: Vec<Row> = (0..5).map(|i| row! { "i" => i }).collect();
        let latex = render_table(&rows, "t", "t", &["i"]).unwrap();
        assert_eq!(latex.matches("\\midrule").count(), 4);
    }

    #[test]
    fn test_no_rows() {
        let rows: Vec<Row> = Vec::new();
        let latex = render_table(&rows, "t", "t", &["a", "b"]).unwrap();
        assert!(!latex.contains("\\midrule"));
        assert!(latex.contains("\\textbf{a} & \\textbf{b} \\\\"));
    }

    #[test]
    fn test_frame_and_records_render_identically() {
        let rows = two_rows();
        let frame: TabularData = rows.clone().into_iter().collect();
        assert_eq!(
            render_table(&frame, "s", "s", &["Score", "Name"]).unwrap(),
            render_table(&rows, "s", "s", &["Score", "Name"]).unwrap()
        );
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let rows = vec![
            row! { "Name" => "alice", "Score" => 91 },
            row! { "Name" => "bob" },
        ];
        let err = render_table(&rows, "s", "s", &["Name", "Score"]).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { row: 1, .. }));
    }

    #[test]
    fn test_escaped_cells() {
        let rows = vec![row! { "path" => "C:\\tmp_dir" }];
        let latex =
            render_table_with_options(&rows, "p", "p", &["path"], &TableOptions::escaped())
                .unwrap();
        assert!(latex.contains("C:\\textbackslash{}tmp\\_dir \\\\"));
    }
}

// ============================================================================
// Frame tables
// ============================================================================

mod frames {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_column_frame() -> TabularData {
        let mut data = TabularData::new(["a", "b"]);
        data.push_values([Value::Float(1.0), Value::Text("x".into())]);
        data.push_values([Value::Float(2.5), Value::Text("y".into())]);
        data
    }

    #[test]
    fn test_flex_columns_have_index_slot() {
        let latex = render_table_from_frame(&two_column_frame(), "results", true, true);
        assert_eq!(count_x_tokens(&latex), 3);
        assert!(latex.contains("\\end{tabularx}"));
    }

    #[test]
    fn test_flex_columns_without_index() {
        let latex = render_table_from_frame(&two_column_frame(), "results", false, true);
        assert_eq!(count_x_tokens(&latex), 3);
    }

    #[test]
    fn test_placement_and_centering_always_added() {
        for flex in [false, true] {
            let latex = render_table_from_frame(&two_column_frame(), "results", true, flex);
            assert!(latex.starts_with("\\begin{table}[H]\n\\centering\n"));
            assert_eq!(latex.matches("\\centering").count(), 1);
        }
    }

    #[test]
    fn test_five_decimal_floats() {
        let latex = render_table_from_frame(&two_column_frame(), "results", true, false);
        assert!(latex.contains("0 & 1.00000 & x \\\\"));
        assert!(latex.contains("1 & 2.50000 & y \\\\"));
    }

    #[test]
    fn test_label_from_caption() {
        let latex = render_table_from_frame(&two_column_frame(), "final results", true, false);
        assert!(latex.contains("\\label{tab:final_results}"));
    }
}

// ============================================================================
// Figures
// ============================================================================

mod figures {
    use super::*;

    #[test]
    fn test_documented_example() {
        let latex = render_figure("plots/cpu_usage.png", DEFAULT_IMAGE_WIDTH);
        assert!(latex.contains("\\label{fig:cpu_usage}"));
        assert!(latex.contains("\\caption{Cpu Usage}"));
        assert!(latex.contains("\\includegraphics[width=1\\textwidth]{plots/cpu_usage.png}"));
        assert!(latex.contains("\\begin{figure}[H]\n\\centering\n"));
    }

    #[test]
    fn test_bare_file_name() {
        let latex = render_figure("latency.pdf", "8cm");
        assert!(latex.contains("\\label{fig:latency}"));
        assert!(latex.contains("[width=8cm]"));
    }

    #[test]
    fn test_given_width_not_rounded_or_converted() {
        let latex = render_figure("a.png", "0.333333\\textwidth");
        assert!(latex.contains("\\includegraphics[width=0.333333\\textwidth]{a.png}"));

        let latex = render_figure("a.png", "100px");
        assert!(latex.contains("\\includegraphics[width=100px]{a.png}"));
    }
}

// ============================================================================
// Data loading
// ============================================================================

#[cfg(feature = "data-loading")]
mod loading {
    use super::*;
    use pretty_assertions::assert_eq;
    use texfrag::{render_table_from_frame_with_options, DataFormat, FrameTableOptions, RenderConfig};

    #[test]
    fn test_csv_to_table() {
        let data = TabularData::parse("Host,Load\nalpha,0.5\nbeta,0.75\n", DataFormat::Csv).unwrap();
        let latex = render_table(&data, "cpu_load", "cpu load", data.columns()).unwrap();
        assert!(latex.contains("alpha & 0.5 \\\\\n\\midrule\nbeta & 0.75 \\\\\n"));
    }

    #[test]
    fn test_json_to_frame_with_config() {
        let data = TabularData::parse(r#"[{"m": 0.1234567}, {"m": 2}]"#, DataFormat::Json).unwrap();
        let config = RenderConfig::from_toml_str("[frame]\ninclude_index = false\nfloat_precision = 2\n")
            .unwrap();
        let latex = render_table_from_frame_with_options(&data, "m", &config.frame);
        assert!(latex.contains("0.12 \\\\"));
        assert!(latex.contains("\n2 \\\\"));
        assert_eq!(config.frame, FrameTableOptions {
            include_index: false,
            float_precision: 2,
            ..Default::default()
        });
    }
}
