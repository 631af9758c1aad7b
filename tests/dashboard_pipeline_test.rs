use dengue_dashboard::charts::figure::Trace;
use dengue_dashboard::domain::model::{Month, TextEncoding};
use dengue_dashboard::{DashboardConfig, DashboardEngine, DashboardError, DashboardPipeline, LocalStorage};
use tempfile::TempDir;

/// Writes `rows` below the two header lines, latin-1 encoded like the real export.
fn write_source(dir: &TempDir, rows: &[&str]) -> String {
    let mut text = String::from("Casos de Dengue - 2024;;;\n");
    text.push_str("DRS;Nome DRS;Cod RS;Nome RS;Município;Jan;...\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    let bytes: Vec<u8> = text.chars().map(|c| c as u32 as u8).collect();

    let path = dir.path().join("trab5_editada.csv");
    std::fs::write(&path, bytes).unwrap();
    path.to_str().unwrap().to_string()
}

fn config(path: String) -> DashboardConfig {
    DashboardConfig {
        source_path: path,
        ..DashboardConfig::default()
    }
}

#[test]
fn test_scenario_row_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, &["SP;São Paulo;1;RS1;CidadeA;10;3;1;0;0;0;0;0;0;0;0;0;0;0;0;"]);

    let pipeline = DashboardPipeline::new(LocalStorage::default(), config(path));
    let build = DashboardEngine::new(pipeline).run().unwrap();

    let jan = build
        .aggregates
        .confirmed_long
        .iter()
        .find(|s| s.municipality == "CidadeA" && s.month == Month::January)
        .unwrap();
    assert_eq!(jan.confirmed, 4);

    let summary = &build.aggregates.summary[0];
    assert_eq!(summary.municipality, "CidadeA");
    assert_eq!(summary.total_notified, 10);
    assert_eq!(summary.total_confirmed, 4);
}

#[test]
fn test_all_garbage_counts_still_yield_summary_row() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        &["SP;São Paulo;1;RS1;Nenhum;a;b;c;d;e;f;g;h;i;j;k;l;m;n;o;"],
    );

    let pipeline = DashboardPipeline::new(LocalStorage::default(), config(path));
    let build = DashboardEngine::new(pipeline).run().unwrap();

    assert_eq!(build.aggregates.summary.len(), 1);
    assert_eq!(build.aggregates.summary[0].total_notified, 0);
    assert_eq!(build.aggregates.summary[0].total_confirmed, 0);
}

#[test]
fn test_accented_names_survive_latin1_decoding() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        &[
            "SP;São José do Rio Preto;15;RS15;São José do Rio Preto;5;2;0;0;0;0;0;0;0;0;0;0;0;0;0;",
            "SP;São José do Rio Preto;15;RS15;Mirassolândia;1;1;0;0;0;0;0;0;0;0;0;0;0;0;0;",
        ],
    );

    let pipeline = DashboardPipeline::new(LocalStorage::default(), config(path));
    let build = DashboardEngine::new(pipeline).run().unwrap();

    assert_eq!(
        build.aggregates.municipalities,
        vec!["Mirassolândia", "São José do Rio Preto"]
    );
}

#[test]
fn test_duplicate_municipalities_are_kept_as_separate_rows() {
    // Intentional: rows sharing a municipality are not merged in the summary.
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        &[
            "SP;X;1;RS1;Cedral;1;1;0;0;0;0;0;0;0;0;0;0;0;0;0;",
            "SP;X;1;RS1;Cedral;2;0;2;0;0;0;0;0;0;0;0;0;0;0;0;",
        ],
    );

    let pipeline = DashboardPipeline::new(LocalStorage::default(), config(path));
    let build = DashboardEngine::new(pipeline).run().unwrap();

    assert_eq!(build.dashboard.table.rows.len(), 2);
    assert_eq!(build.aggregates.municipalities, vec!["Cedral"]);

    // The line chart has one "Cedral" series holding both rows' points.
    let cedral = build
        .dashboard
        .line
        .figure
        .data
        .iter()
        .find(|t| t.name() == Some("Cedral"))
        .unwrap();
    match cedral {
        Trace::Scatter { y, .. } => assert_eq!(y.len(), 10),
        other => panic!("expected scatter trace, got {other:?}"),
    }
}

#[test]
fn test_sum_invariants_hold_on_mixed_input() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        &[
            "SP;X;1;RS1;A;10;3;1;8;2;2;6;1;0;4;0;1;2;1;1;",
            "SP;X;1;RS1;B;1;x;1;-3;5;0;0;0;0;0;0;0;9;4;4;lixo",
            ";X;1;RS1;C;100;100;100;100;100;100;100;100;100;100;100;100;100;100;100;",
            "SP;X;1;RS1;;100;100;100;100;100;100;100;100;100;100;100;100;100;100;100;",
        ],
    );

    let pipeline = DashboardPipeline::new(LocalStorage::default(), config(path));
    let build = DashboardEngine::new(pipeline).run().unwrap();
    let aggregates = &build.aggregates;

    assert_eq!(build.stats.rows_kept, 2);
    for total in &aggregates.monthly_totals {
        let expected: u64 = aggregates
            .confirmed_long
            .iter()
            .filter(|s| s.month == total.month)
            .map(|s| s.confirmed)
            .sum();
        assert_eq!(total.confirmed, expected);
    }
    let totals: Vec<u64> = aggregates.monthly_totals.iter().map(|t| t.confirmed).collect();
    assert_eq!(totals, vec![4 + 1, 4 + 5, 1, 1, 2 + 8]);

    for row in &aggregates.summary {
        let monthly: u64 = aggregates
            .series_for(&row.municipality)
            .map(|s| s.confirmed)
            .sum();
        assert_eq!(row.total_confirmed, monthly);
    }
}

#[test]
fn test_pipeline_is_idempotent_on_same_file() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        &[
            "SP;X;1;RS1;A;10;3;1;8;2;2;6;1;0;4;0;1;2;1;1;",
            "SP;X;1;RS1;B;1;0;1;3;5;0;0;0;0;0;0;0;9;4;4;",
        ],
    );

    let run = || {
        let pipeline = DashboardPipeline::new(LocalStorage::default(), config(path.clone()));
        DashboardEngine::new(pipeline).run().unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.aggregates, second.aggregates);
    assert_eq!(first.dashboard, second.dashboard);
}

#[test]
fn test_utf8_source_with_custom_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("casos.csv");
    std::fs::write(&path, "cabecalho\nSP,São Paulo,1,RS1,Araçatuba,3,1,1\n").unwrap();

    let mut config = config(path.to_str().unwrap().to_string());
    config.source.skip_rows = 1;
    config.source.delimiter = b',';
    config.source.encoding = TextEncoding::Utf8;

    let build = DashboardEngine::new(DashboardPipeline::new(LocalStorage::default(), config))
        .run()
        .unwrap();

    assert_eq!(build.aggregates.municipalities, vec!["Araçatuba"]);
    assert_eq!(build.aggregates.summary[0].total_confirmed, 2);
}

#[test]
fn test_missing_source_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nao_existe.csv");

    let pipeline = DashboardPipeline::new(
        LocalStorage::default(),
        config(missing.to_str().unwrap().to_string()),
    );
    let err = DashboardEngine::new(pipeline).run().unwrap_err();

    match &err {
        DashboardError::SourceNotFound { path, .. } => assert!(path.ends_with("nao_existe.csv")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.user_friendly_message().contains("não foi encontrado"));
}
