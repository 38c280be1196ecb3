use armory::{run, ArmoryError, DemoConfig, DemoSummary, Journal, RandomSource, ScriptedSource};
use cursors::CursorError;

/// Writer that refuses every byte
struct BrokenWriter;

impl embedded_io::ErrorType for BrokenWriter {
    type Error = embedded_io::ErrorKind;
}

impl embedded_io::Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
        Err(embedded_io::ErrorKind::Other)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn run_to_string(config: &DemoConfig, script: &[u8]) -> (DemoSummary, String) {
    let mut source = ScriptedSource::new(script.to_vec());
    let mut out: Vec<u8> = Vec::new();
    let summary = run(config, &mut source, &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn test_default_run_counts() {
    let (summary, output) = run_to_string(&DemoConfig::default(), &[1, 2, 3]);

    assert_eq!(
        summary,
        DemoSummary {
            array_shots: 5,
            sequence_shots: 5,
            list_shots: 5,
            decommissioned: 15,
        }
    );
    assert_eq!(output.matches("Creating a ").count(), 15);
    let removed = output
        .lines()
        .filter(|line| line.starts_with("Removing the ") && line.ends_with(" sample..."))
        .count();
    assert_eq!(removed, 15);
    // Numbered walks over the array and the sequence, not the list
    assert_eq!(output.matches("Sample number ").count(), 10);
    // Cleaning on all three walks, reloading only on the first two
    assert_eq!(output.matches("Cleaning the ").count(), 15);
    assert_eq!(output.matches("Reloading the ").count(), 10);
}

#[test]
fn test_scripted_run_follows_the_script() {
    let config = DemoConfig {
        per_container: 1,
        ..DemoConfig::default()
    };
    let (_, output) = run_to_string(&config, &[1, 2, 3]);

    let created: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("Creating a "))
        .collect();
    assert_eq!(
        created,
        vec![
            "Creating a Colt M1911 sample...",
            "Creating a RPK sample...",
            "Creating a VSS Vintorez sample...",
        ]
    );
    assert!(output.contains("Colt M1911 : firing single shots..."));
    assert!(output.contains("RPK : firing long bursts..."));
    assert!(output.contains("VSS Vintorez : firing short bursts..."));
}

#[test]
fn test_sections_appear_in_order() {
    let (_, output) = run_to_string(&DemoConfig::default(), &[2]);

    let headings = [
        "Creating and filling the firearm array:",
        "Creating and filling the firearm sequence:",
        "Creating and filling the firearm list:",
        "Decorators at work on the firearm array:",
        "Decorators at work on the firearm sequence:",
        "Working through the firearm list with an adapter:",
        "Removing the samples:",
    ];
    let positions: Vec<usize> = headings
        .iter()
        .map(|heading| output.find(heading).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_empty_containers() {
    let config = DemoConfig {
        per_container: 0,
        ..DemoConfig::default()
    };
    let (summary, output) = run_to_string(&config, &[]);

    assert_eq!(summary, DemoSummary::default());
    assert!(!output.contains("Sample number"));
}

#[test]
fn test_capacity_exceeded_aborts() {
    let config = DemoConfig {
        per_container: 4,
        array_capacity: 3,
    };
    let mut source = ScriptedSource::new([1]);
    let mut out: Vec<u8> = Vec::new();

    let err = run(&config, &mut source, &mut out).unwrap_err();
    assert_eq!(
        err,
        ArmoryError::Cursor(CursorError::CapacityExceeded { capacity: 3 })
    );
    // Nothing was flushed before the failing phase completed
    assert!(out.is_empty());
}

#[test]
fn test_zero_capacity_rejected() {
    let config = DemoConfig {
        per_container: 1,
        array_capacity: 0,
    };
    let err = run(&config, &mut ScriptedSource::new([1]), &mut Vec::<u8>::new()).unwrap_err();
    assert_eq!(
        err,
        ArmoryError::Cursor(CursorError::InvalidCapacity { capacity: 0 })
    );
}

#[test]
fn test_unallocatable_capacity_rejected() {
    let config = DemoConfig {
        per_container: 1,
        array_capacity: usize::MAX,
    };
    let mut out: Vec<u8> = Vec::new();
    let err = run(&config, &mut ScriptedSource::new([1]), &mut out).unwrap_err();

    assert_eq!(
        err,
        ArmoryError::Cursor(CursorError::InvalidCapacity {
            capacity: usize::MAX
        })
    );
    assert!(out.is_empty());
}

#[test]
fn test_unrecognized_discriminant_aborts() {
    let err = run(
        &DemoConfig::default(),
        &mut ScriptedSource::new([1, 9]),
        &mut Vec::<u8>::new(),
    )
    .unwrap_err();
    assert_eq!(err, ArmoryError::UnrecognizedVariant { discriminant: 9 });
}

#[test]
fn test_output_error_is_reported() {
    let err = run(
        &DemoConfig::default(),
        &mut ScriptedSource::new([3]),
        &mut BrokenWriter,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ArmoryError::Output {
            kind: embedded_io::ErrorKind::Other
        }
    );
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let render = |seed| {
        let mut out: Vec<u8> = Vec::new();
        run(
            &DemoConfig::default(),
            &mut RandomSource::seeded(seed),
            &mut out,
        )
        .unwrap();
        out
    };

    assert_eq!(render(2024), render(2024));
}

#[test]
fn test_journal_flush_writes_lines() {
    let mut journal = Journal::new();
    journal.line("first");
    journal.blank();
    journal.line(String::from("second"));

    let mut out: Vec<u8> = Vec::new();
    journal.flush_to(&mut out).unwrap();

    assert_eq!(out, b"first\n\nsecond\n");
    assert!(journal.is_empty());
}
