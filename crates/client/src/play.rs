//! Drives a scripted encounter and writes the transcript.
use std::fmt;
use std::io::Write;

use anyhow::Result;
use combat_content::ScriptStep;
use runtime::{CombatRuntime, TurnReport};

/// How a scripted encounter ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Defeat,
    Victory,
    /// The script ran out with hostile NPCs still standing.
    Unresolved { hostiles: usize },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defeat => f.write_str("You have fallen."),
            Self::Victory => f.write_str("No hostile stands against you."),
            Self::Unresolved { hostiles } => write!(f, "{hostiles} hostile(s) remain."),
        }
    }
}

/// Plays `script` turn by turn, printing narration after each turn.
///
/// Steps naming an actor that is dead or in another room are skipped.
pub async fn run_script(
    runtime: &mut CombatRuntime,
    script: &[ScriptStep],
    out: &mut impl Write,
) -> Result<Outcome> {
    for step in script {
        if runtime.player_defeated() {
            break;
        }

        let report = match step {
            ScriptStep::Attack { target, text } => {
                let world = &runtime.state().world;
                let found = world
                    .find_by_name(target)
                    .map(|actor| actor.id)
                    .filter(|&id| world.is_with_player(id));
                let Some(id) = found else {
                    writeln!(out, "> {text}  ({target} is not here)")?;
                    continue;
                };
                writeln!(out, "> {text}")?;
                runtime.player_attack(id, text).await?
            }
            ScriptStep::Wait => {
                writeln!(out, "> wait")?;
                runtime.player_wait().await?
            }
        };
        print_turn(&report, out)?;
    }

    Ok(if runtime.player_defeated() {
        Outcome::Defeat
    } else {
        match runtime.hostiles_remaining() {
            0 => Outcome::Victory,
            hostiles => Outcome::Unresolved { hostiles },
        }
    })
}

fn print_turn(report: &TurnReport, out: &mut impl Write) -> Result<()> {
    for line in &report.narration {
        writeln!(out, "  {}", line.text)?;
    }
    writeln!(out, "  [t={}]", report.clock)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use combat_content::{EncounterLoader, ItemLoader};
    use runtime::ItemOracleImpl;

    use super::*;
    use crate::config::ClientConfig;

    #[tokio::test]
    async fn shipped_encounter_plays_to_an_outcome() {
        let config = ClientConfig::default();
        let encounter = EncounterLoader::load(&config.encounter_path()).unwrap();
        let items = ItemLoader::load(&config.content_path("items.ron")).unwrap();
        let script = encounter.script.clone();

        let mut runtime = CombatRuntime::builder()
            .encounter(encounter)
            .items(ItemOracleImpl::from_definitions(items))
            .build()
            .unwrap();

        let mut out = Vec::new();
        let outcome = run_script(&mut runtime, &script, &mut out).await.unwrap();
        let transcript = String::from_utf8(out).unwrap();

        assert!(transcript.starts_with("> slash the goblin with my sword\n"));
        assert!(transcript.contains("[t="));
        match outcome {
            Outcome::Defeat => assert!(runtime.player_defeated()),
            Outcome::Victory => assert_eq!(runtime.hostiles_remaining(), 0),
            Outcome::Unresolved { hostiles } => assert!(hostiles > 0),
        }
    }

    #[tokio::test]
    async fn missing_targets_are_skipped() {
        let config = ClientConfig::default();
        let encounter = EncounterLoader::load(&config.encounter_path()).unwrap();
        let mut runtime = CombatRuntime::builder().encounter(encounter).build().unwrap();
        // Hostile NPCs are scheduled at build time.
        let logged = runtime.combat_log().len();
        let clock = runtime.clock();

        let script = [ScriptStep::Attack {
            target: "dragon".into(),
            text: "attack dragon".into(),
        }];
        let mut out = Vec::new();
        run_script(&mut runtime, &script, &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "> attack dragon  (dragon is not here)\n"
        );
        assert_eq!(runtime.combat_log().len(), logged);
        assert_eq!(runtime.clock(), clock);
    }

    #[tokio::test]
    async fn targets_in_another_room_are_skipped() {
        let config = ClientConfig::default();
        let encounter = EncounterLoader::load(&config.encounter_path()).unwrap();
        let mut runtime = CombatRuntime::builder().encounter(encounter).build().unwrap();
        let clock = runtime.clock();

        // The rat waits in the cellar.
        let script = [ScriptStep::Attack {
            target: "rat".into(),
            text: "kick the rat".into(),
        }];
        let mut out = Vec::new();
        run_script(&mut runtime, &script, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "> kick the rat  (rat is not here)\n");
        assert_eq!(runtime.clock(), clock);
    }
}
