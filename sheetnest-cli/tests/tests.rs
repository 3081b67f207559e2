#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use clap::Parser;
    use sheetnest_cli::config::RunConfig;
    use sheetnest_cli::io;
    use sheetnest_cli::io::cli::Cli;
    use sheetnest_cli::runner;
    use sheetnest::util::CancelToken;

    #[test_case("../assets/brackets.json"; "brackets")]
    #[test_case("../assets/panels.json"; "panels")]
    fn test_instance(instance_path: &str) {
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let n_parts = ext_instance.parts.len();

        let artifacts = runner::run(ext_instance, RunConfig::default(), None).unwrap();
        let solution = &artifacts.output.solution;

        assert_eq!(
            solution.footprints.len() + solution.skipped_part_ids.len(),
            n_parts
        );
        assert!(!solution.sheets.is_empty());
        assert!(solution.density > 0.0);
        let summed = solution.sheets.iter().map(|s| s.density).sum::<f64>() / solution.sheets.len() as f64;
        assert!(approx_eq!(f64, summed, solution.density, epsilon = 1e-9));

        let json = serde_json::to_string(&artifacts.output).unwrap();
        assert!(json.contains("\"solution\""));
        assert!(artifacts.svg.to_string().contains("sheet_0"));
    }

    #[test]
    fn oversized_panel_is_reported() {
        let ext_instance = io::read_instance(Path::new("../assets/panels.json")).unwrap();
        let artifacts = runner::run(ext_instance, RunConfig::default(), None).unwrap();
        let solution = &artifacts.output.solution;

        assert_eq!(solution.warnings.len(), 1);
        assert_eq!(solution.warnings[0].width, 150.0);
        let outlines = solution.sheets.iter().map(|s| s.outline.x_min).collect::<Vec<_>>();
        //the wide panel wraps to a new row on the last sheet, not to a new sheet
        assert_eq!(outlines, vec![0.0, 100.0, 200.0]);
        assert_eq!(solution.placements[3].sheet, 2);
    }

    #[test]
    fn cancelled_run_fails() {
        let ext_instance = io::read_instance(Path::new("../assets/brackets.json")).unwrap();
        let token = CancelToken::new();
        token.cancel();
        assert!(runner::run(ext_instance, RunConfig::default(), Some(&token)).is_err());
    }

    #[test_case(r#"{ "nest": { "rotation": { "angle_step_deg": 15 } } }"#; "step only")]
    #[test_case(r#"{ "nest": { "rotation": { "degenerate_policy": "abort" } } }"#; "policy only")]
    #[test_case(r#"{ "nest": { "packing": {} } }"#; "empty packing")]
    #[test_case(r#"{ "svg_draw_options": { "shapes": false } }"#; "svg only")]
    fn partial_config_falls_back_to_defaults(json: &str) {
        let config: RunConfig = serde_json::from_str(json).unwrap();
        let default = RunConfig::default();
        assert_eq!(config.nest.packing, default.nest.packing);
        assert!([5, 15].contains(&config.nest.rotation.angle_step_deg));
        assert_eq!(config.svg_draw_options.theme, default.svg_draw_options.theme);
    }

    #[test]
    fn outputs_are_written() {
        let folder = std::env::temp_dir().join(format!("sheetnest_cli_{}", std::process::id()));
        std::fs::create_dir_all(&folder).unwrap();

        let ext_instance = io::read_instance(Path::new("../assets/brackets.json")).unwrap();
        let artifacts = runner::run(ext_instance, RunConfig::default(), None).unwrap();
        let json_path = folder.join("sol_brackets.json");
        let svg_path = folder.join("sol_brackets.svg");
        io::write_json(&artifacts.output, &json_path).unwrap();
        io::write_svg(&artifacts.svg, &svg_path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(written["name"], "brackets");
        assert!(svg_path.exists());

        std::fs::remove_dir_all(&folder).unwrap();
    }

    #[test]
    fn missing_instance_file_is_an_error() {
        let err = io::read_instance(Path::new("../assets/does_not_exist.json")).unwrap_err();
        assert!(err.to_string().contains("could not open instance file"));
    }

    #[test_case(&[], None; "no override")]
    #[test_case(&["--optimize"], Some((0, true)); "optimize")]
    #[test_case(&["--angle", "90"], Some((90, false)); "fixed angle")]
    #[test_case(&["-a", "-45"], Some((-45, false)); "negative angle")]
    fn rotation_flags_override_instance(flags: &[&str], expected: Option<(i32, bool)>) {
        let base = ["sheetnest", "-i", "in.json", "-s", "out"];
        let cli = Cli::try_parse_from(base.iter().chain(flags)).unwrap();
        let rotation = cli.rotation_override().map(|r| (r.manual_angle_deg, r.optimize));
        assert_eq!(rotation, expected);
    }

    #[test]
    fn angle_and_optimize_are_exclusive() {
        let args = ["sheetnest", "-i", "in.json", "-s", "out", "--angle", "30", "--optimize"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn input_and_solution_folder_are_required() {
        assert!(Cli::try_parse_from(["sheetnest", "-i", "in.json"]).is_err());
        let cli = Cli::try_parse_from(["sheetnest", "-i", "in.json", "-s", "out"]).unwrap();
        assert_eq!(cli.log_level, log::LevelFilter::Info);
        assert!(cli.config_file.is_none());
    }
}
