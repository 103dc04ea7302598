use crate::{
    impl_text_view,
    model::games::Game,
    styled_line, styled_span,
    ui::{Controller, TextCreationResult},
};

// ============================================================================
// Match History View
// ============================================================================

fn match_history_view(ctrl: &Controller) -> TextCreationResult {
    let profile = match ctrl.manager.lookup_player(&ctrl.query.player_name, ctrl.query.region)? {
        Some(profile) => profile,
        None => {
            return Ok(vec![
                styled_line!(),
                styled_line!("  No player named '{}' found in {}.", ctrl.query.player_name, ctrl.query.region.name; Yellow),
            ]);
        }
    };

    let history = ctrl.manager.match_history(&profile, ctrl.query.region)?;

    let mut lines = vec![
        styled_line!(),
        styled_line!("Recent matches for {} ({} found)", history.player_name, history.games.len(); Cyan Bold),
    ];

    if history.games.is_empty() {
        lines.push(styled_line!());
        lines.push(styled_line!("  No recent matches found."; Yellow));
        if profile.puuid.is_none() {
            lines.push(styled_line!("  Match history needs a full account id, which this key cannot read."; DarkGray));
        }
        return Ok(lines);
    }

    for (index, game) in history.games.iter().enumerate() {
        lines.push(styled_line!());
        lines.push(styled_line!("Match {}", index + 1; Cyan Bold));
        lines.push(styled_line!("  Mode:      {}", game.mode));
        lines.push(styled_line!("  Duration:  {}", game.duration_display()));
        lines.push(styled_line!("  Date:      {}", game.created.format("%Y-%m-%d %H:%M")));
        push_own_result(&mut lines, game, &history.player_name);
    }

    Ok(lines)
}

fn push_own_result(lines: &mut Vec<ratatui::text::Line<'static>>, game: &Game, player_name: &str) {
    match game.participant(player_name) {
        Some(own) => {
            lines.push(styled_line!("  Champion:  {}", own.champion));
            lines.push(styled_line!("  Position:  {} - {}", own.role, own.lane));
            lines.push(styled_line!("  KDA:       {}/{}/{}", own.kills, own.deaths, own.assists));
            let result = if own.win {
                styled_span!("VICTORY"; Green Bold)
            } else {
                styled_span!("DEFEAT"; Red Bold)
            };
            lines.push(styled_line!(LIST [styled_span!("  Result:    "), result]));
        }
        None => lines.push(styled_line!("  Player not listed in this match."; DarkGray)),
    }
}

impl_text_view!(MatchHistoryView, match_history_view, "Match History");
