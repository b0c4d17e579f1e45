//! Tests for command-line parsing and the simulation runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use walkerpaths::WalkerError;
    use walkerpaths::algorithm::spawner::{ColorMode, DropoffAxis};
    use walkerpaths::io::cli::{Cli, SimulationRunner};
    use walkerpaths::io::configuration::{
        DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_SIZE, LineStyle, PaperFormat,
    };

    // Tests parsing with no arguments uses the defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["walkerpaths"]);

        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!((cli.size - DEFAULT_SIZE).abs() < f64::EPSILON);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.dropoff, DropoffAxis::None);
        assert_eq!(cli.color_mode, ColorMode::Direction);
        assert_eq!(cli.paper, PaperFormat::Square);
        assert_eq!(cli.line_style, LineStyle::Solid);
        assert!(cli.svg.is_none());
        assert!(cli.max_steps.is_none());
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    // Tests every long option reaches its field
    // Verified by renaming an argument
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "walkerpaths",
            "--seed",
            "fern",
            "--size",
            "40",
            "--population",
            "2",
            "--repulsion",
            "0.8",
            "--max-turn",
            "90",
            "--turn-resolution",
            "2",
            "--dropoff-rate",
            "0.5",
            "--dropoff",
            "radial",
            "--color-mode",
            "position",
            "--color1",
            "#000",
            "--pencils",
            "3",
            "--draw-pencil",
            "2",
            "--paper",
            "letter-h",
            "--line-style",
            "dotted",
            "--svg",
            "out/plot.svg",
            "--max-steps",
            "500",
            "--batch",
            "25",
        ]);

        let simulation = cli.simulation_config();
        assert_eq!(simulation.seed, "fern");
        assert!((simulation.size - 40.0).abs() < f64::EPSILON);
        assert!((simulation.population - 2.0).abs() < f64::EPSILON);
        assert!((simulation.repulsion - 0.8).abs() < f64::EPSILON);
        assert!((simulation.max_turn_degrees - 90.0).abs() < f64::EPSILON);
        assert!((simulation.turn_resolution_degrees - 2.0).abs() < f64::EPSILON);
        assert!((simulation.dropoff_rate - 0.5).abs() < f64::EPSILON);
        assert_eq!(simulation.dropoff_axis, DropoffAxis::Radial);
        assert_eq!(simulation.color_mode, ColorMode::Position);
        assert_eq!(simulation.channels, 3);
        assert_eq!(simulation.draw_channel, 2);
        assert!(simulation.validate().is_ok());

        assert_eq!(cli.paper, PaperFormat::LetterH);
        assert_eq!(cli.line_style, LineStyle::Dotted);
        assert_eq!(cli.svg, Some(PathBuf::from("out/plot.svg")));
        assert_eq!(cli.max_steps, Some(500));
        assert_eq!(cli.batch, 25);
    }

    // Tests short flags
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "walkerpaths", "-s", "12", "-p", "3", "-r", "0.5", "-t", "45", "-o", "a.png", "-q",
        ]);

        assert!((cli.size - 12.0).abs() < f64::EPSILON);
        assert!((cli.population - 3.0).abs() < f64::EPSILON);
        assert!((cli.repulsion - 0.5).abs() < f64::EPSILON);
        assert!((cli.max_turn - 45.0).abs() < f64::EPSILON);
        assert_eq!(cli.output, PathBuf::from("a.png"));
        assert!(cli.quiet);
    }

    // Tests progress display and log level follow the quiet and verbose flags
    // Verified by inverting quiet flag logic
    #[test]
    fn test_progress_and_log_filter() {
        let default = Cli::parse_from(["walkerpaths"]);
        assert!(default.should_show_progress());
        assert_eq!(default.log_filter(), "info");

        let quiet = Cli::parse_from(["walkerpaths", "--quiet", "--verbose"]);
        assert!(!quiet.should_show_progress());
        assert_eq!(quiet.log_filter(), "warn");

        let verbose = Cli::parse_from(["walkerpaths", "-v"]);
        assert_eq!(verbose.log_filter(), "debug");
    }

    // Tests render configuration parses colors and rejects bad ones
    // Verified by ignoring the background argument
    #[test]
    fn test_render_config() {
        let cli = Cli::parse_from(["walkerpaths", "--color2", "#102030", "--background", "000"]);
        let render = cli.render_config().expect("valid colors");
        assert_eq!(render.colors.get(1), Some(&[0x10, 0x20, 0x30, 0xFF]));
        assert_eq!(render.background, [0, 0, 0, 0xFF]);

        let bad = Cli::parse_from(["walkerpaths", "--color3", "teal"]);
        assert!(matches!(
            bad.render_config(),
            Err(WalkerError::InvalidColor { .. })
        ));
    }

    // Tests a full run writes both outputs and reports completion
    // Verified by skipping the svg export
    #[test]
    fn test_runner_exports_outputs() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let png_path = temp_dir.path().join("nested").join("plot.png");
        let svg_path = temp_dir.path().join("plot.svg");

        let cli = Cli::parse_from([
            "walkerpaths".into(),
            "--seed".into(),
            "runner".into(),
            "--size".into(),
            "6".into(),
            "--quiet".into(),
            "--output".into(),
            png_path.clone().into_os_string(),
            "--svg".into(),
            svg_path.clone().into_os_string(),
        ]);

        let report = SimulationRunner::new(cli).run().expect("run should succeed");

        assert_eq!(report.seed, "runner");
        assert!(report.completed);
        assert_eq!(report.statistics.walkers, 4);
        assert_eq!(report.statistics.active_walkers, 0);
        assert!(png_path.exists());
        assert!(svg_path.exists());
    }

    // Tests the step limit stops the run early
    // Verified by ignoring max_steps
    #[test]
    fn test_runner_step_limit() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let png_path = temp_dir.path().join("limited.png");

        let cli = Cli::parse_from([
            "walkerpaths".into(),
            "--seed".into(),
            "limit".into(),
            "--size".into(),
            "10".into(),
            "--max-steps".into(),
            "1".into(),
            "-q".into(),
            "-o".into(),
            png_path.clone().into_os_string(),
        ]);

        let report = SimulationRunner::new(cli).run().expect("run should succeed");

        assert!(!report.completed);
        assert_eq!(report.statistics.steps, 1);
        assert!(png_path.exists());
    }

    // Tests invalid parameters fail before anything is written
    // Verified by validating after export
    #[test]
    fn test_runner_rejects_invalid_parameters() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let png_path = temp_dir.path().join("never.png");

        let cli = Cli::parse_from([
            "walkerpaths".into(),
            "--size".into(),
            "500".into(),
            "-q".into(),
            "-o".into(),
            png_path.clone().into_os_string(),
        ]);

        assert!(matches!(
            SimulationRunner::new(cli).run(),
            Err(WalkerError::InvalidParameter {
                parameter: "size",
                ..
            })
        ));
        assert!(!png_path.exists());
    }
}
