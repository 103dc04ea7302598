use itertools::Itertools;

use crate::{
    impl_text_view,
    model::analysis::{PlayerReport, Provenance},
    styled_line, styled_span,
    ui::{Controller, TextCreationResult},
};

// ============================================================================
// Player Analysis View
// ============================================================================

fn analysis_view(ctrl: &Controller) -> TextCreationResult {
    let report = ctrl.manager.analyze_player(&ctrl.query.player_name, ctrl.query.region)?;

    let report = match report {
        Some(report) => report,
        None => {
            return Ok(vec![
                styled_line!(),
                styled_line!("  No player named '{}' found in {}.", ctrl.query.player_name, ctrl.query.region.name; Yellow),
                styled_line!(),
                styled_line!("  Check the spelling or try another region."),
            ]);
        }
    };

    let mut lines = vec![styled_line!(), badge_line(&report), styled_line!()];

    lines.push(styled_line!("Player"; Cyan Bold));
    lines.push(styled_line!("  Name:            {}", report.profile.name));
    lines.push(styled_line!("  Region:          {} ({})", ctrl.query.region.name, ctrl.query.region.code));
    lines.push(styled_line!("  Level:           {}", optional(report.profile.level)));
    lines.push(styled_line!(LIST [
        styled_span!("  Estimated tier:  "),
        styled_span!(report.analysis.estimated_tier; Magenta Bold),
    ]));
    lines.push(styled_line!("  ID:              {}", report.profile.id));
    lines.push(styled_line!("  PUUID:           {}", optional(report.profile.puuid.clone())));
    lines.push(styled_line!());

    lines.push(styled_line!("Ranked"; Cyan Bold));
    push_queue_lines(&mut lines, "Solo Queue", report.ranked.solo_queue.as_ref());
    push_queue_lines(&mut lines, "Flex Queue", report.ranked.flex_queue.as_ref());
    lines.push(styled_line!());

    lines.push(styled_line!("Top Champions"; Cyan Bold));
    for mastery in report.masteries.iter().sorted_by_key(|m| std::cmp::Reverse(m.points)) {
        lines.push(styled_line!(
            "  {:<12} mastery {} - {} pts",
            mastery.champ_name,
            mastery.level,
            mastery.points
        ));
    }
    lines.push(styled_line!());

    lines.push(styled_line!("Strengths"; Green Bold));
    if report.analysis.strengths.is_empty() {
        lines.push(styled_line!("  No specific strengths identified"; DarkGray));
    }
    for strength in &report.analysis.strengths {
        lines.push(styled_line!("  + {}", strength; Green));
    }
    lines.push(styled_line!());

    lines.push(styled_line!("Weaknesses"; Red Bold));
    if report.analysis.weaknesses.is_empty() {
        lines.push(styled_line!("  No major weaknesses identified"; DarkGray));
    }
    for weakness in &report.analysis.weaknesses {
        lines.push(styled_line!("  - {}", weakness; Red));
    }
    lines.push(styled_line!());

    lines.push(styled_line!("Recommendations"; Cyan Bold));
    for recommendation in &report.analysis.recommendations {
        lines.push(styled_line!("  * {}", recommendation));
    }

    if !report.profile.is_live {
        lines.push(styled_line!());
        lines.push(styled_line!("  Limited API key - parts of this report are placeholder data."; Yellow));
        lines.push(styled_line!("  Request a production key for live numbers."; Yellow));
    }

    Ok(lines)
}

fn badge_line(report: &PlayerReport) -> ratatui::text::Line<'static> {
    let provenance = report.provenance();
    let badge = match provenance {
        Provenance::Live => styled_span!(provenance.label(); Green Bold),
        Provenance::Demo => styled_span!(provenance.label(); Yellow Bold),
        Provenance::Limited => styled_span!(provenance.label(); Cyan Bold),
    };

    styled_line!(LIST [
        styled_span!("  ["),
        badge,
        styled_span!("]  updated {}", report.profile.last_updated.format("%Y-%m-%d %H:%M:%S UTC"); DarkGray),
    ])
}

fn push_queue_lines(
    lines: &mut Vec<ratatui::text::Line<'static>>,
    label: &str,
    queue: Option<&crate::model::ranked::RankedQueueStats>,
) {
    match queue {
        Some(stats) => {
            let win_rate = match stats.win_rate() {
                Some(rate) => format!("{:.1}%", rate),
                None => "n/a".to_string(),
            };
            lines.push(styled_line!(
                "  {:<12} {} {} - {} LP, {}W/{}L ({})",
                label,
                stats.tier,
                stats.division,
                stats.league_points,
                stats.wins,
                stats.losses,
                win_rate
            ));
        }
        None => lines.push(styled_line!("  {:<12} unranked", label; DarkGray)),
    }
}

fn optional<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "N/A".to_string(),
    }
}

impl_text_view!(AnalysisView, analysis_view, "Player Analysis");
