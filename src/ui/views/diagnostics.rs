use crate::{
    impl_text_view,
    service::diagnostics::DiagnosticsService,
    styled_line, styled_span,
    ui::{Controller, TextCreationResult},
};

// ============================================================================
// Diagnostics View
// ============================================================================

fn diagnostics_view(ctrl: &Controller) -> TextCreationResult {
    let service = DiagnosticsService::new(ctrl.manager.client(), ctrl.config);
    let results = service.run();

    let mut lines = vec![
        styled_line!(),
        styled_line!("API diagnostics"; Cyan Bold),
        styled_line!(),
    ];

    let mut failures = 0;
    for result in &results {
        let marker = if result.passed {
            styled_span!("[ OK ]"; Green Bold)
        } else {
            failures += 1;
            styled_span!("[FAIL]"; Red Bold)
        };
        lines.push(styled_line!(LIST [
            styled_span!("  "),
            marker,
            styled_span!(" {:<28} {}", result.label, result.detail),
        ]));
    }

    lines.push(styled_line!());
    if failures == 0 {
        lines.push(styled_line!("All checks passed."; Green));
    } else {
        lines.push(styled_line!("{} check(s) failed.", failures; Red));
        lines.push(styled_line!("New development keys: https://developer.riotgames.com/"; DarkGray));
    }

    Ok(lines)
}

impl_text_view!(DiagnosticsView, diagnostics_view, "Diagnostics");
