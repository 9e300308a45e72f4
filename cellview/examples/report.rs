//! Render a small service-status table to stdout.
//!
//! Run with: cargo run -p cellview --example report

use cellview::prelude::*;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Clone, Debug)]
struct Service {
    name: String,
    status: String,
    healthy: bool,
}

fn service(name: &str, status: &str, healthy: bool) -> Service {
    Service {
        name: name.into(),
        status: status.into(),
        healthy,
    }
}

fn main() {
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger init");

    let table = CellTable::with_rows(vec![
        service("gateway", "ok", true),
        service("indexer", "backlog <5m>", false),
        service("mailer", "ok", true),
    ]);

    table.add_column_with_header(
        TextColumn::new(|s: &Service| s.name.clone()),
        TextHeader::new("Service"),
    );
    table.add_column_with_header(
        TextColumn::new(|s: &Service| s.status.clone()),
        SafeHtmlHeader::new(SafeHtml::from_trusted("<em>Status</em>")),
    );

    table.set_row_styles(|s: &Service, _row_index: usize| {
        (!s.healthy).then(|| "degraded".to_string())
    });

    println!("{}", table.render());

    // Deferred work runs when the host drains its queue, never inline.
    let (scheduler, mut queue) = command_channel();
    reset_focus(
        &scheduler,
        Box::new(|| log::info!("focus moved to first data row")),
    );
    log::info!("render turn finished");
    queue.drain();
}
