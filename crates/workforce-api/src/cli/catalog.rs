//! `validate` and `list` commands.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use workforce_types::skill::RoleKind;

use crate::state::AppState;

/// Report what the loaded catalog contains.
///
/// Reaching this point means every definition file parsed; load failures
/// surface as an error from `AppState::init` before this runs.
pub fn validate(state: &AppState, json: bool) -> anyhow::Result<()> {
    let catalog = &state.catalog;

    if json {
        println!("{}", render_summary_json(state)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Catalog is valid",
        style("✓").green().bold()
    );
    println!();
    println!("  {:<12} {}", "skills", style(catalog.skills().len()).bold());
    println!("  {:<12} {}", "industries", style(catalog.industries().len()).bold());
    println!("  {:<12} {}", "checks", style(catalog.checks().len()).bold());
    println!();

    Ok(())
}

/// `--json` output of `validate`.
fn render_summary_json(state: &AppState) -> anyhow::Result<String> {
    let catalog = &state.catalog;
    let summary = serde_json::json!({
        "valid": true,
        "skills": catalog.skills().len(),
        "industries": catalog.industries().len(),
        "checks": catalog.checks().len(),
    });
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// `--json` output of `list`.
fn render_skills_json(state: &AppState) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(state.catalog.skills())?)
}

/// Print the skill catalog as a table, or JSON with `--json`.
pub fn list_skills(state: &AppState, json: bool) -> anyhow::Result<()> {
    let skills = state.catalog.skills();

    if json {
        println!("{}", render_skills_json(state)?);
        return Ok(());
    }

    if skills.is_empty() {
        println!();
        println!(
            "  {} No skills found. Add definitions under: {}",
            style("i").blue().bold(),
            style(state.skills_dir.display()).yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Shortcode").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Role").fg(Color::White),
    ]);

    for skill in skills {
        let role_cell = match skill.role {
            RoleKind::Group => Cell::new("group").fg(Color::DarkGrey),
            RoleKind::Generic => Cell::new("generic").fg(Color::Yellow),
            RoleKind::Specific => Cell::new("specific").fg(Color::Green),
        };

        table.add_row(vec![
            Cell::new(&skill.shortcode).fg(Color::Cyan),
            Cell::new(&skill.name),
            role_cell,
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} skill{}",
        style(skills.len()).bold(),
        if skills.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use workforce_core::catalog::Catalog;
    use workforce_types::config::ServiceConfig;
    use workforce_types::skill::Skill;

    fn state() -> AppState {
        let catalog = Catalog::new(
            vec![
                Skill::new("Electrician", "elec", RoleKind::Specific),
                Skill::new("Driver", "driver", RoleKind::Generic),
            ],
            Vec::new(),
            Vec::new(),
        );
        AppState::new(catalog, &ServiceConfig::default())
    }

    #[test]
    fn list_json_output_parses() {
        let out = render_skills_json(&state()).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            json!([
                {"name": "Electrician", "shortcode": "elec", "role": "specific"},
                {"name": "Driver", "shortcode": "driver", "role": "generic"}
            ])
        );
    }

    #[test]
    fn validate_json_output_parses() {
        let out = render_summary_json(&state()).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            json!({"valid": true, "skills": 2, "industries": 0, "checks": 0})
        );
    }
}
