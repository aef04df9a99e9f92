use anyhow::{bail, Context, Result};
use cable_check::observed::ObservedLinks;
use cable_check::report::{render_report, render_summary};
use cable_check::settings::{load_settings, Placement, ReportFormat};
use cabling_core::{
    format_json, load_document_with_options, reconcile_device, Report, TextOptions,
};

use crate::cli::CheckArgs;

pub fn run_check(args: CheckArgs) -> Result<()> {
    let (mut settings, source) = load_settings(args.config.as_deref())?;
    tracing::debug!(%source, "using settings");
    if let Some(format) = args.format {
        settings.format = format.into();
    }
    if args.trailing_undocumented {
        settings.undocumented = Placement::Trailing;
    }
    settings.strict |= args.strict;
    settings.legacy_status |= args.legacy_status;

    let load_opts = settings.load_options();
    let desired = load_document_with_options(&args.desired, &load_opts)
        .with_context(|| format!("failed to load desired cabling {}", args.desired.display()))?;
    let observed = match (&args.existing_file, &args.existing) {
        (Some(path), _) => ObservedLinks::from_file(path, &load_opts)?,
        (None, Some(raw)) => ObservedLinks::from_inline(raw)?,
        (None, None) => bail!("one of --existing-file or --existing is required"),
    };

    let reconcile_opts = settings.reconcile_options();
    let mut reports = Vec::with_capacity(args.devices.len());
    let mut skipped = 0;
    for device in &args.devices {
        match reconcile_device(&desired, device, observed.for_device(device), &reconcile_opts) {
            Ok(report) => reports.push(report),
            Err(err) if args.keep_going => {
                tracing::warn!(device = %device, "skipping device");
                eprintln!("error: {err}");
                skipped += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    match settings.format {
        ReportFormat::Text => {
            let text_opts = TextOptions {
                legacy_status: settings.legacy_status,
            };
            let blocks: Vec<String> = reports
                .iter()
                .map(|report| render_block(report, text_opts, args.summary))
                .collect();
            if !blocks.is_empty() {
                println!("{}", blocks.join("\n\n"));
            }
        }
        ReportFormat::Json => {
            // Shape follows the requested device count.
            if let ([_], [report]) = (args.devices.as_slice(), reports.as_slice()) {
                println!("{}", format_json(report));
            } else {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
        }
    }

    if skipped > 0 {
        bail!("cabling check incomplete: {skipped} device(s) could not be checked");
    }
    let failing: usize = reports
        .iter()
        .map(|r| r.result.iter().filter(|d| !d.status.is_ok()).count())
        .sum();
    if settings.strict && failing > 0 {
        bail!("cabling check failed in strict mode: {failing} link(s) not OK");
    }
    Ok(())
}

fn render_block(report: &Report, opts: TextOptions, summary: bool) -> String {
    let mut out = render_report(report, opts);
    if summary {
        out.push('\n');
        out.push_str(&render_summary(report));
    }
    out
}
