use crate::render;
use anyhow::Result;
use configuration::OutputFormat;
use dataset::{DatasetCache, DatasetSource};
use navigator::{QueryRegistry, Section};
use std::io::{BufRead, Write};

/// What the operator asked for at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Show(String),
    Reload,
    Quit,
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        "q" | "quit" | "exit" => Command::Quit,
        "r" | "reload" => Command::Reload,
        "" => Command::Show(Section::default().key().to_string()),
        other => Command::Show(other.to_string()),
    }
}

fn write_menu(out: &mut impl Write, registry: &QueryRegistry) -> Result<()> {
    writeln!(out, "Telecom Customer Insights")?;
    for section in registry.sections() {
        writeln!(out, "  {:>2}) {}", section.number(), section.key())?;
    }
    writeln!(out, "   r) Reload dataset")?;
    writeln!(out, "   q) Quit")?;
    write!(out, "Select a section [{}]: ", Section::default().number())?;
    out.flush()?;
    Ok(())
}

/// Runs the interactive navigation loop until `q` or end of input.
///
/// A bad selection or a failed reload is reported and the loop carries on;
/// only I/O failures on `out` end it early.
pub fn run<S: DatasetSource>(
    cache: &DatasetCache<S>,
    registry: &QueryRegistry,
    format: OutputFormat,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    write_menu(out, registry)?;
    for line in input.lines() {
        match parse_command(&line?) {
            Command::Quit => break,
            Command::Reload => match cache.reload() {
                Ok(dataset) => writeln!(out, "Reloaded {} records.", dataset.len())?,
                Err(e) => writeln!(out, "Reload failed: {e}. Still using the previous dataset.")?,
            },
            Command::Show(key) => {
                let dataset = cache.get()?;
                match registry.run_key(&key, &dataset) {
                    Ok(report) => render::write_reports(out, &[report], format)?,
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
        }
        write_menu(out, registry)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Dataset;
    use dataset::IngestionError;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Loads an empty dataset the first time, then fails.
    struct FlakySource {
        loads: AtomicUsize,
    }

    impl DatasetSource for FlakySource {
        fn load(&self) -> Result<Dataset, IngestionError> {
            if self.loads.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(Dataset::default())
            } else {
                Err(IngestionError::Empty(PathBuf::from("customers.csv")))
            }
        }

        fn describe(&self) -> String {
            "flaky".to_string()
        }
    }

    fn session(input: &str) -> String {
        let cache = DatasetCache::new(FlakySource {
            loads: AtomicUsize::new(0),
        });
        let registry = QueryRegistry::default();
        let mut out = Vec::new();
        run(&cache, &registry, OutputFormat::Table, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn commands_are_parsed_leniently() {
        assert_eq!(parse_command(" q "), Command::Quit);
        assert_eq!(parse_command("reload"), Command::Reload);
        assert_eq!(
            parse_command(""),
            Command::Show("Customer Segmentation".to_string())
        );
        assert_eq!(parse_command("7"), Command::Show("7".to_string()));
    }

    #[test]
    fn selecting_a_section_renders_it() {
        let text = session("4\nq\n");
        assert!(text.contains("== KYC Compliance Check =="));
        assert!(text.contains("No data"));
    }

    #[test]
    fn unknown_selection_is_reported_and_the_loop_continues() {
        let text = session("Roaming\n2\n");
        assert!(text.contains("Unknown section 'Roaming'"));
        assert!(text.contains("== Churn Risk Analysis =="));
    }

    #[test]
    fn failed_reload_keeps_the_session_alive() {
        let text = session("1\nr\n1\nq\n");
        assert!(text.contains("Reload failed"));
        assert_eq!(text.matches("== Customer Segmentation ==").count(), 2);
    }
}
