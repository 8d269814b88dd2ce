use stochastic_life3d::{run, DiagonalProbe, Grid, Report, ScanMode, SimConfig};

fn reference(seed: u64) -> SimConfig {
    SimConfig {
        seed: Some(seed),
        ..SimConfig::default()
    }
}

#[test]
fn reference_run_reports_ten_times() {
    let mut reports: Vec<Report> = Vec::new();
    let summary = run(&reference(2024), &mut |grid: &Grid, r: &Report| {
        assert_eq!(grid.shape().volume(), 15625);
        reports.push(*r);
    })
    .unwrap();

    assert_eq!(reports.len(), 10);
    assert_eq!(reports[0].generation, 0);
    assert_eq!(reports[0].births, 0);
    assert_eq!(reports[0].deaths, 0);
    assert_eq!(summary.final_report.generation, 9);

    for pair in reports.windows(2) {
        assert!(pair[1].births >= pair[0].births);
        assert!(pair[1].deaths >= pair[0].deaths);
    }

    let last = reports[9];
    assert!((last.occupancy - last.births as f64 / 15625.0).abs() < 1e-12);
    assert!(summary.grid.boundary_is_dead());
}

#[test]
fn same_seed_same_run() {
    for scan in [ScanMode::InPlace, ScanMode::Snapshot] {
        for probe in [DiagonalProbe::Paired, DiagonalProbe::Shifted] {
            let mut config = reference(77);
            config.engine.scan = scan;
            config.engine.diagonal_probe = probe;

            let a = run(&config, &mut |_: &Grid, _: &Report| {}).unwrap();
            let b = run(&config, &mut |_: &Grid, _: &Report| {}).unwrap();

            assert_eq!(a.grid, b.grid);
            assert_eq!(a.final_report, b.final_report);
        }
    }
}

#[test]
fn snapshot_threads_do_not_change_run() {
    let mut single = reference(5);
    single.engine.scan = ScanMode::Snapshot;
    let mut pooled = single.clone();
    pooled.engine.threads = 4;

    let a = run(&single, &mut |_: &Grid, _: &Report| {}).unwrap();
    let b = run(&pooled, &mut |_: &Grid, _: &Report| {}).unwrap();

    assert_eq!(a.grid, b.grid);
    assert_eq!(a.final_report, b.final_report);
}

#[test]
fn degenerate_lattice_runs_without_births() {
    let config = SimConfig {
        width: 2,
        height: 25,
        depth: 25,
        initial_density: 0.5,
        seed: Some(1),
        ..SimConfig::default()
    };

    let summary = run(&config, &mut |_: &Grid, _: &Report| {}).unwrap();
    assert_eq!(summary.final_report.births, 0);
    assert_eq!(summary.final_report.deaths, 0);
    assert_eq!(summary.grid.alive_count(), 0);
}
