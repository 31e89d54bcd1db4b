// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Wraps the cargo invocations used locally and in CI, and checks that the
//! persistence migrations produce the expected `SQLite` schema.
//!
//! - `cargo xtask ci` runs lint, build, test, and migration verification
//! - `cargo xtask verify-migrations` applies every migration to a scratch
//!   in-memory database and inspects the result

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    eyre::{bail, eyre, Context},
    Result,
};
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use duct::cmd;
use std::collections::{BTreeMap, BTreeSet};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");

/// Tables and the columns each must carry once every migration has run.
const EXPECTED_SCHEMA: &[(&str, &[&str])] = &[
    (
        "calculation_sessions",
        &[
            "calculation_id",
            "name",
            "email",
            "region",
            "phone_number",
            "energy_consumption",
            "has_transportation",
            "solid_waste_total",
            "recycle_percentage",
            "lifecycle_state",
            "created_at",
        ],
    ),
    (
        "transportation_entries",
        &["calculation_id", "position", "vehicle_type", "monthly_distance"],
    ),
    ("energy_emission_factors", &["region", "factor"]),
    (
        "solid_waste_emission_factors",
        &["region", "recyclable_factor", "non_recyclable_factor"],
    ),
    ("transportation_emission_factors", &["vehicle_type", "factor"]),
];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test, migrations)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Lint formatting, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib tests
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Apply migrations to a scratch database and check the resulting schema
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

/// Run CI checks (lint, build, test, migrations)
fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    verify_migrations()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Lint formatting, clippy, and docs
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without errors using docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    cmd!("cargo", "doc", "--no-deps", "--all-features")
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Run lib tests and doc tests
fn test() -> Result<()> {
    test_libs()?;
    test_docs()?; // run last because it's slow
    Ok(())
}

/// Run doc tests for the workspace's default packages
fn test_docs() -> Result<()> {
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run lib tests for the workspace's default packages
fn test_libs() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Apply every migration to an in-memory database and check the schema.
///
/// Fails when a table or column is missing, when an unexpected table
/// appears, or when `transportation_entries` loses its foreign key to
/// `calculation_sessions`. Also runs every migration's `down.sql` to make
/// sure the schema can be rolled back cleanly.
fn verify_migrations() -> Result<()> {
    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to open in-memory SQLite database")?;
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .wrap_err("Failed to enable foreign keys")?;

    tracing::info!("Applying migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply migrations: {e}"))?;

    let schema = introspect_sqlite_schema(&mut conn)?;
    compare_with_expected(&schema)?;
    tracing::info!("Schema matches: {} tables", schema.len());

    tracing::info!("Reverting migrations");
    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to revert migrations: {e}"))?;
    let remaining = introspect_sqlite_schema(&mut conn)?;
    if !remaining.is_empty() {
        bail!(
            "Tables left behind after reverting migrations: {:?}",
            remaining.keys().collect::<Vec<_>>()
        );
    }

    tracing::info!("✅ Migrations verified");
    Ok(())
}

#[derive(Debug, Default)]
struct Table {
    columns: BTreeSet<String>,
    /// `(from_column, to_table)` pairs.
    foreign_keys: BTreeSet<(String, String)>,
}

/// Introspect `SQLite` schema
fn introspect_sqlite_schema(conn: &mut SqliteConnection) -> Result<BTreeMap<String, Table>> {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Integer)]
        #[allow(dead_code)]
        cid: i32,
        #[diesel(sql_type = Text)]
        name: String,
    }

    #[derive(QueryableByName)]
    struct ForeignKeyInfo {
        #[diesel(sql_type = Text)]
        table: String,
        #[diesel(sql_type = Text)]
        from: String,
    }

    let mut schema = BTreeMap::new();

    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name"
    )
    .load(conn)
    .wrap_err("Failed to query SQLite tables")?;

    for table in tables {
        let columns: Vec<ColumnInfo> =
            diesel::sql_query(format!("PRAGMA table_info({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get columns for table {}", table.name))?;

        let fks: Vec<ForeignKeyInfo> =
            diesel::sql_query(format!("PRAGMA foreign_key_list({})", table.name))
                .load(conn)
                .wrap_err(format!(
                    "Failed to get foreign keys for table {}",
                    table.name
                ))?;

        schema.insert(
            table.name,
            Table {
                columns: columns.into_iter().map(|c| c.name).collect(),
                foreign_keys: fks.into_iter().map(|fk| (fk.from, fk.table)).collect(),
            },
        );
    }

    Ok(schema)
}

/// Compare the introspected schema against `EXPECTED_SCHEMA`
fn compare_with_expected(schema: &BTreeMap<String, Table>) -> Result<()> {
    let mut problems: Vec<String> = Vec::new();

    let expected_tables: BTreeSet<&str> = EXPECTED_SCHEMA.iter().map(|(name, _)| *name).collect();
    for table in schema.keys() {
        if !expected_tables.contains(table.as_str()) {
            problems.push(format!("  - Unexpected table '{table}'"));
        }
    }

    for (table_name, columns) in EXPECTED_SCHEMA {
        let Some(table) = schema.get(*table_name) else {
            problems.push(format!("  - Missing table '{table_name}'"));
            continue;
        };
        for column in *columns {
            if !table.columns.contains(*column) {
                problems.push(format!(
                    "  - Missing column '{column}' in table '{table_name}'"
                ));
            }
        }
        for column in &table.columns {
            if !columns.contains(&column.as_str()) {
                problems.push(format!(
                    "  - Unexpected column '{column}' in table '{table_name}'"
                ));
            }
        }
    }

    let session_fk = (
        String::from("calculation_id"),
        String::from("calculation_sessions"),
    );
    if schema
        .get("transportation_entries")
        .is_some_and(|table| !table.foreign_keys.contains(&session_fk))
    {
        problems.push(String::from(
            "  - transportation_entries.calculation_id does not reference calculation_sessions",
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        for problem in &problems {
            tracing::error!("{problem}");
        }
        bail!("Schema verification failed with {} problem(s)", problems.len())
    }
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
