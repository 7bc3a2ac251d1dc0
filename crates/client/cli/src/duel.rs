//! Scripted duel between two characters.
//!
//! Each round the challenger takes a turn through the configured
//! [`BattleSequence`], then the opponent counterattacks with an
//! [`AttackCommand`] routed through the [`CommandInvoker`], so counters can be
//! undone afterwards. Recoverable failures (e.g. a drained mage) skip the
//! action; anything else aborts the duel.

use arena_content::{CharacterFactory, CombatantSpec, DuelConfig};
use arena_core::{
    ActorId, AttackCommand, BattleSequence, CommandInvoker, GameCommand, GameError, Roster,
    TurnOutcome, execute_turn,
};

/// One thing that happened during a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Turn {
        attacker: String,
        defender: String,
        outcome: TurnOutcome,
    },
    Counter {
        description: String,
        damage_dealt: i32,
    },
    Skipped {
        actor: String,
        reason: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub actions: Vec<Action>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelReport {
    pub rounds: Vec<RoundReport>,
    /// `None` when both sides are standing after the last round.
    pub winner: Option<String>,
    /// Descriptions of commands reverted after the fight, most recent first.
    pub undone: Vec<String>,
    /// Final character lines, challenger first.
    pub standings: Vec<String>,
}

pub struct Duel {
    config: DuelConfig,
    roster: Roster,
    invoker: CommandInvoker,
    sequence: Box<dyn BattleSequence>,
    challenger: ActorId,
    opponent: ActorId,
}

impl Duel {
    pub fn new(config: DuelConfig, factory: &CharacterFactory) -> Self {
        let mut roster = Roster::new();
        let challenger = spawn(&mut roster, factory, &config.challenger);
        let opponent = spawn(&mut roster, factory, &config.opponent);

        Self {
            sequence: config.sequence.build(),
            config,
            roster,
            invoker: CommandInvoker::new(),
            challenger,
            opponent,
        }
    }

    pub fn run(mut self) -> anyhow::Result<DuelReport> {
        let mut rounds = Vec::new();
        let mut last_round_start = 0;

        for round in 1..=self.config.max_rounds {
            last_round_start = self.invoker.len();
            let mut actions = vec![self.challenger_turn()?];
            if self.roster.get(self.opponent)?.is_alive() {
                actions.push(self.opponent_counter()?);
            }
            tracing::info!(round, actions = actions.len(), "round finished");
            rounds.push(RoundReport { round, actions });

            if self.is_decided()? {
                break;
            }
        }

        let mut undone = Vec::new();
        if self.config.undo_last_round {
            while self.invoker.len() > last_round_start {
                match self.invoker.undo(&mut self.roster)? {
                    Some(command) => undone.push(command.description()),
                    None => break,
                }
            }
        }

        Ok(DuelReport {
            rounds,
            winner: self.winner()?,
            undone,
            standings: self
                .roster
                .iter()
                .map(|(_, character)| character.to_string())
                .collect(),
        })
    }

    fn challenger_turn(&mut self) -> anyhow::Result<Action> {
        let (attacker, defender) = self.roster.pair_mut(self.challenger, self.opponent)?;
        let attacker_name = attacker.name().to_owned();
        let defender_name = defender.name().to_owned();

        match execute_turn(self.sequence.as_mut(), attacker, defender) {
            Ok(outcome) => Ok(Action::Turn {
                attacker: attacker_name,
                defender: defender_name,
                outcome,
            }),
            Err(error) if error.severity().is_recoverable() => {
                tracing::warn!(
                    actor = %attacker_name,
                    severity = error.severity().as_str(),
                    %error,
                    "turn skipped"
                );
                Ok(Action::Skipped {
                    actor: attacker_name,
                    reason: error.to_string(),
                })
            }
            Err(error) => Err(error.into()),
        }
    }

    fn opponent_counter(&mut self) -> anyhow::Result<Action> {
        let command = AttackCommand::new(&self.roster, self.opponent, self.challenger)?;
        let description = command.description();
        let before = self.roster.get(self.challenger)?.stats().health();

        match self.invoker.execute(command, &mut self.roster) {
            Ok(()) => Ok(Action::Counter {
                description,
                damage_dealt: before - self.roster.get(self.challenger)?.stats().health(),
            }),
            Err(error) if error.severity().is_recoverable() => {
                let actor = self.roster.get(self.opponent)?.name().to_owned();
                tracing::warn!(
                    %actor,
                    severity = error.severity().as_str(),
                    %error,
                    "counter skipped"
                );
                Ok(Action::Skipped {
                    actor,
                    reason: error.to_string(),
                })
            }
            Err(error) => Err(error.into()),
        }
    }

    fn is_decided(&self) -> anyhow::Result<bool> {
        let challenger_down = self.roster.get(self.challenger)?.is_dead();
        Ok(challenger_down || self.roster.get(self.opponent)?.is_dead())
    }

    fn winner(&self) -> anyhow::Result<Option<String>> {
        let challenger = self.roster.get(self.challenger)?;
        let opponent = self.roster.get(self.opponent)?;
        Ok(match (challenger.is_alive(), opponent.is_alive()) {
            (true, false) => Some(challenger.name().to_owned()),
            (false, true) => Some(opponent.name().to_owned()),
            _ => None,
        })
    }
}

fn spawn(roster: &mut Roster, factory: &CharacterFactory, spec: &CombatantSpec) -> ActorId {
    roster.spawn(factory.create(spec.name.as_str(), spec.archetype))
}
