//! High-level runtime orchestrator.
//!
//! [`CombatRuntime`] owns the game state and the optional text services and
//! drives one player turn at a time. Every turn mutates state through the
//! core engine before any narration is awaited.

use std::collections::BTreeMap;

use combat_content::{ConfigLoader, EncounterSpec};
use combat_core::{
    ActionKind, CombatConfig, CombatEnv, CombatLog, EntityId, GameEngine, GameState, PcgRng,
    RngOracle, StaticClassifier, StrikeReport, SweepReport, Tick, WorldState,
};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::api::{
    ClassifierService, KeywordClassifierService, NarrationRequest, Narrator, Result,
    RuntimeError, TemplateNarrator, TurnReport,
};
use crate::config::RuntimeConfig;
use crate::events::{Event, EventBus, Topic, TurnEvent};
use crate::narration::{classify_bounded, narrate_bounded};
use crate::oracle::ItemOracleImpl;

/// Main runtime that drives combat turns.
pub struct CombatRuntime {
    config: RuntimeConfig,
    combat: CombatConfig,
    seed: u64,
    state: GameState,
    items: ItemOracleImpl,
    rng: Box<dyn RngOracle>,
    classifier: Box<dyn ClassifierService>,
    narrator: Box<dyn Narrator>,
    bus: EventBus,
}

impl CombatRuntime {
    /// Create a new runtime builder
    pub fn builder() -> CombatRuntimeBuilder {
        CombatRuntimeBuilder::new()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn combat_log(&self) -> &CombatLog {
        &self.state.log
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn combat_config(&self) -> &CombatConfig {
        &self.combat
    }

    /// Effective game seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn clock(&self) -> Tick {
        self.state.clock()
    }

    /// Subscribe to one event topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    /// The player is dead; further turns are rejected.
    pub fn player_defeated(&self) -> bool {
        self.state.world.player().is_none_or(|player| player.is_dead())
    }

    /// Number of living hostile NPCs.
    pub fn hostiles_remaining(&self) -> usize {
        self.state
            .world
            .actors()
            .filter(|actor| actor.is_npc() && actor.is_hostile() && !actor.is_dead())
            .count()
    }

    /// The player attacks `target`, described by `action_text`.
    ///
    /// Classification is awaited first, bounded by the classification
    /// timeout. The attack and the NPC sweep then run synchronously; only
    /// afterwards is narration requested. A rejected command leaves the state
    /// untouched.
    pub async fn player_attack(
        &mut self,
        target: EntityId,
        action_text: &str,
    ) -> Result<TurnReport> {
        let skill = classify_bounded(
            self.classifier.as_ref(),
            action_text,
            self.config.classification_timeout,
        )
        .await;

        let cursor = self.state.log.len();
        let roster = Roster::capture(&self.state.world);

        let classifier = StaticClassifier(skill);
        let env = combat_env(&self.combat, &self.items, self.rng.as_ref(), self.seed)
            .with_classifier(&classifier);
        let strike = GameEngine::new(&mut self.state, env).player_attack(target, action_text)?;
        debug!(
            target = %target,
            skill = %strike.skill,
            dealt = strike.damage_dealt(),
            "player attack resolved"
        );

        let sweep = self.sweep();
        Ok(self.finish_turn(Some(strike), sweep, cursor, &roster).await)
    }

    /// The player waits one turn.
    pub async fn player_wait(&mut self) -> Result<TurnReport> {
        let cursor = self.state.log.len();
        let roster = Roster::capture(&self.state.world);

        let env = combat_env(&self.combat, &self.items, self.rng.as_ref(), self.seed);
        GameEngine::new(&mut self.state, env).player_wait(ActionKind::Wait)?;

        let sweep = self.sweep();
        Ok(self.finish_turn(None, sweep, cursor, &roster).await)
    }

    /// NPC turns use the keyword classifier on their fixed attack text.
    fn sweep(&mut self) -> SweepReport {
        let env = combat_env(&self.combat, &self.items, self.rng.as_ref(), self.seed);
        let report = GameEngine::new(&mut self.state, env).run_sweep();
        for event in &report.events {
            debug!(?event, "sweep step");
        }
        report
    }

    /// Narration, event publication and the summary. State is final here.
    async fn finish_turn(
        &self,
        player: Option<StrikeReport>,
        sweep: SweepReport,
        cursor: usize,
        roster: &Roster,
    ) -> TurnReport {
        let mut narration = Vec::new();
        for strike in player.iter().chain(sweep.strikes()) {
            let request = roster.request(strike);
            narration.push(
                narrate_bounded(self.narrator.as_ref(), &request, self.config.narration_timeout)
                    .await,
            );
        }

        let entries = self.state.log.since(cursor).to_vec();
        for entry in &entries {
            self.bus.publish(Event::Combat(entry.clone()));
        }
        self.bus.publish(Event::Turn(TurnEvent {
            clock: self.clock(),
            queued: self
                .state
                .queue
                .iter()
                .map(|entry| (entry.actor, entry.ready_at))
                .collect(),
            player_died: sweep.player_died,
        }));

        let report = TurnReport {
            clock: self.clock(),
            player,
            sweep,
            narration,
            entries,
        };
        info!(
            clock = %report.clock,
            strikes = report.strikes(),
            degraded = report.degraded_narration(),
            player_died = report.player_died(),
            "turn complete"
        );
        report
    }
}

fn combat_env<'e>(
    combat: &'e CombatConfig,
    items: &'e ItemOracleImpl,
    rng: &'e dyn RngOracle,
    seed: u64,
) -> CombatEnv<'e> {
    CombatEnv::new(combat)
        .with_items(items)
        .with_rng(rng)
        .with_seed(seed)
}

/// Actor names captured before a turn, so narration can still name actors
/// that died and were removed during it.
struct Roster {
    names: BTreeMap<EntityId, String>,
}

impl Roster {
    fn capture(world: &WorldState) -> Self {
        Self {
            names: world
                .actors()
                .map(|actor| (actor.id, actor.name.clone()))
                .collect(),
        }
    }

    fn name(&self, id: EntityId) -> String {
        self.names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    fn request(&self, strike: &StrikeReport) -> NarrationRequest {
        NarrationRequest {
            attacker: strike.attacker,
            attacker_name: self.name(strike.attacker),
            defender: strike.defender,
            defender_name: self.name(strike.defender),
            skill: strike.skill.clone(),
            result: strike.result.clone(),
            fallback_damage: strike.fallback_damage,
            defender_died: strike.defender_died(),
        }
    }
}

/// Builder for [`CombatRuntime`].
pub struct CombatRuntimeBuilder {
    config: RuntimeConfig,
    combat: Option<CombatConfig>,
    state: Option<GameState>,
    encounter: Option<EncounterSpec>,
    items: ItemOracleImpl,
    rng: Option<Box<dyn RngOracle>>,
    classifier_service: Option<Box<dyn ClassifierService>>,
    narrator: Option<Box<dyn Narrator>>,
}

impl CombatRuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            combat: None,
            state: None,
            encounter: None,
            items: ItemOracleImpl::new(),
            rng: None,
            classifier_service: None,
            narrator: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Combat tunables. Without this, `COMBAT_CONFIG_PATH` is loaded if set,
    /// else the built-in defaults apply.
    pub fn combat_config(mut self, combat: CombatConfig) -> Self {
        self.combat = Some(combat);
        self
    }

    /// Provide initial game state
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Start from a fresh world.
    pub fn world(self, world: WorldState) -> Self {
        self.initial_state(GameState::new(world))
    }

    /// Start from an encounter definition. Its seed is used unless the
    /// runtime configuration sets one.
    pub fn encounter(mut self, encounter: EncounterSpec) -> Self {
        self.encounter = Some(encounter);
        self
    }

    pub fn items(mut self, items: ItemOracleImpl) -> Self {
        self.items = items;
        self
    }

    /// Replace the default PCG rng oracle
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Set the classification backend (default: keyword table)
    pub fn classifier_service(mut self, service: impl ClassifierService + 'static) -> Self {
        self.classifier_service = Some(Box::new(service));
        self
    }

    /// Set the narration backend (default: templates)
    pub fn narrator(mut self, narrator: impl Narrator + 'static) -> Self {
        self.narrator = Some(Box::new(narrator));
        self
    }

    /// Build the runtime
    ///
    /// NPCs that start out hostile are admitted to the turn queue here.
    pub fn build(self) -> Result<CombatRuntime> {
        let encounter_seed = self.encounter.as_ref().and_then(|spec| spec.seed);
        let mut state = match (self.state, &self.encounter) {
            (Some(state), _) => state,
            (None, Some(spec)) => {
                GameState::new(spec.build_world().map_err(RuntimeError::Content)?)
            }
            (None, None) => return Err(RuntimeError::MissingState),
        };

        let combat = match (self.combat, &self.config.combat_config_path) {
            (Some(combat), _) => combat,
            (None, Some(path)) => ConfigLoader::load(path).map_err(RuntimeError::Content)?,
            (None, None) => CombatConfig::default(),
        };
        let seed = self.config.seed.or(encounter_seed).unwrap_or(0);
        let rng = self.rng.unwrap_or_else(|| Box::new(PcgRng));

        let env = combat_env(&combat, &self.items, rng.as_ref(), seed);
        let admitted = GameEngine::new(&mut state, env).admit_hostiles();
        for (npc, change) in &admitted {
            debug!(npc = %npc, ?change, "hostile at start");
        }
        info!(
            seed,
            actors = state.world.actors().count(),
            items = self.items.len(),
            queued = state.queue.len(),
            "combat runtime ready"
        );

        Ok(CombatRuntime {
            bus: EventBus::with_capacity(self.config.event_buffer_size),
            config: self.config,
            combat,
            seed,
            state,
            items: self.items,
            rng,
            classifier: self
                .classifier_service
                .unwrap_or_else(|| Box::new(KeywordClassifierService::default())),
            narrator: self.narrator.unwrap_or_else(|| Box::new(TemplateNarrator)),
        })
    }
}
