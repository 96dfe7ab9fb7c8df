//! The encounter session: one command in, one response out.

use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use vh_core::{CombatEntity, EntityId, EntityKind, Roster};
use vh_engine::{FinalizeOutcome, RollOutcome, TieResolutionSession, roll_all};
use vh_store::{BATTLE_FILE, BattleArchive, HISTORY_FILE, TEMPLATES_FILE, TemplateLibrary};

use crate::config::EncounterConfig;
use crate::error::{SessionError, SessionResult};

/// An interactive encounter: the roster, the tie being resolved (if any),
/// the dice, and the storage collaborators.
///
/// Commands run to completion one at a time; there is no interleaving of
/// two rolls or two finalize attempts. Every roster mutation is mirrored
/// to the autosave file, and a failed write never blocks play.
pub struct EncounterSession {
    roster: Roster,
    pending: Option<TieResolutionSession>,
    library: TemplateLibrary,
    archive: BattleArchive,
    rng: StdRng,
    battle_path: PathBuf,
    history_path: PathBuf,
}

impl EncounterSession {
    /// Open a session over a data directory, restoring the autosaved
    /// roster from the previous run when one exists.
    pub fn new(config: EncounterConfig) -> SessionResult<Self> {
        fs::create_dir_all(&config.data_dir).map_err(vh_store::StoreError::from)?;

        let library = TemplateLibrary::load(&config.data_dir.join(TEMPLATES_FILE))?;
        let history_path = config.data_dir.join(HISTORY_FILE);
        let archive = BattleArchive::load(&history_path)?;
        let battle_path = config.data_dir.join(BATTLE_FILE);
        let roster = vh_store::load_roster(&battle_path).unwrap_or_default();

        Ok(Self {
            roster,
            pending: None,
            library,
            archive,
            rng: StdRng::seed_from_u64(config.seed),
            battle_path,
            history_path,
        })
    }

    /// The current roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The template library this session draws from.
    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    /// The battle archive.
    pub fn archive(&self) -> &BattleArchive {
        &self.archive
    }

    /// True while a tie is waiting to be resolved.
    pub fn has_open_tie(&self) -> bool {
        self.pending.is_some()
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let (cmd, rest) = match trimmed.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (trimmed, ""),
        };

        match cmd.to_lowercase().as_str() {
            "add" => self.do_add(rest),
            "remove" | "rm" => self.do_remove(rest),
            "hp" => self.do_hp(rest),
            "init" => self.do_init(rest),
            "mark" => self.do_mark(rest),
            "list" | "ls" => Ok(self.do_list()),
            "templates" => Ok(self.do_templates()),
            "roll" => self.do_roll(),
            "tiebreak" => self.do_tiebreak(rest),
            "reroll" => self.do_reroll(rest),
            "resolve" => self.do_resolve(),
            "finish" => self.do_finish(),
            "clear" => self.do_clear(),
            "help" => Ok(Self::help()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }

    fn do_add(&mut self, name: &str) -> SessionResult<String> {
        self.guard_no_tie()?;
        if name.is_empty() {
            return Err(SessionError::Usage("usage: add <template>".to_string()));
        }
        let template = self
            .library
            .get(name)
            .cloned()
            .ok_or_else(|| SessionError::UnknownTemplate(name.to_string()))?;

        let added = self.roster.add_from_template(&template)?.name.clone();
        self.autosave();
        Ok(format!("{added} joins the roster."))
    }

    fn do_remove(&mut self, name: &str) -> SessionResult<String> {
        self.guard_no_tie()?;
        let id = self.resolve_id(name)?;
        let removed = self.roster.remove(id)?;
        self.autosave();
        Ok(format!("{} removed.", removed.name))
    }

    fn do_hp(&mut self, rest: &str) -> SessionResult<String> {
        let (name, amount) = split_name_value(rest)
            .ok_or_else(|| SessionError::Usage("usage: hp <name> <amount>".to_string()))?;
        let id = self.resolve_id(name)?;
        let hp = self.roster.adjust_hp(id, amount)?;
        self.autosave();

        let entity = self.roster.get(id).expect("entity just adjusted");
        let mut out = format!("{}: {hp} hp.", entity.name);
        if entity.is_down() {
            out.push_str(" [down]");
        }
        Ok(out)
    }

    fn do_init(&mut self, rest: &str) -> SessionResult<String> {
        self.guard_no_tie()?;
        let (name, value) = split_name_value(rest)
            .ok_or_else(|| SessionError::Usage("usage: init <name> <value>".to_string()))?;
        let id = self.resolve_id(name)?;
        self.roster.set_manual_initiative(id, value)?;
        self.autosave();

        let entity_name = &self.roster.get(id).expect("entity just updated").name;
        if value == 0 {
            Ok(format!("{entity_name} will roll next time."))
        } else {
            Ok(format!("{entity_name} will act on {value}."))
        }
    }

    fn do_mark(&mut self, name: &str) -> SessionResult<String> {
        let id = self.resolve_id(name)?;
        let defeated = self.roster.toggle_defeated(id)?;
        self.autosave();

        let entity_name = &self.roster.get(id).expect("entity just toggled").name;
        if defeated {
            Ok(format!("{entity_name} marked defeated."))
        } else {
            Ok(format!("{entity_name} unmarked."))
        }
    }

    fn do_list(&self) -> String {
        if self.roster.is_empty() {
            return "The roster is empty.".to_string();
        }
        format!("Roster ({}):\n{}", self.roster.len(), self.list_lines())
    }

    fn do_templates(&self) -> String {
        if self.library.is_empty() {
            return "No templates yet. Add some with 'vh template add'.".to_string();
        }

        let mut out = String::new();
        let players = self.library.players();
        if !players.is_empty() {
            out.push_str("Players:\n");
            for t in players {
                out.push_str(&format!("  {} (mod {:+})\n", t.name, t.initiative_modifier));
            }
        }
        let npcs = self.library.npcs();
        if !npcs.is_empty() {
            out.push_str("NPCs:\n");
            for t in npcs {
                out.push_str(&format!(
                    "  {} ({} hp, mod {:+})\n",
                    t.name, t.base_hp, t.initiative_modifier
                ));
            }
        }
        out.trim_end().to_string()
    }

    fn do_roll(&mut self) -> SessionResult<String> {
        self.guard_no_tie()?;
        if self.roster.is_empty() {
            return Err(SessionError::EmptyRoster);
        }

        match roll_all(&mut self.roster, &mut self.rng) {
            RollOutcome::Ordered => {
                self.autosave();
                Ok(format!("Turn order:\n{}", self.list_lines()))
            }
            RollOutcome::Tied(session) => {
                self.autosave();
                let mut out = String::from("Initiative ties!\n");
                for (total, members) in session.groups() {
                    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
                    out.push_str(&format!("  at {total}: {}\n", names.join(", ")));
                }
                out.push_str(
                    "Players type 'tiebreak <name> <value>'; NPCs use 'reroll <name>'; \
                     then 'resolve'.",
                );
                self.pending = Some(session);
                Ok(out)
            }
        }
    }

    fn do_tiebreak(&mut self, rest: &str) -> SessionResult<String> {
        let (name, value) = split_name_value(rest)
            .ok_or_else(|| SessionError::Usage("usage: tiebreak <name> <value>".to_string()))?;
        let pending = self.pending.as_mut().ok_or(SessionError::NoActiveTie)?;
        let (id, kind, canonical) = find_contender(pending, name)?;

        if kind == EntityKind::Npc {
            return Err(SessionError::Usage(format!(
                "{canonical} is an NPC; use 'reroll {canonical}'"
            )));
        }
        if value == 0 {
            return Err(SessionError::Usage(
                "the tie-breaker must be nonzero".to_string(),
            ));
        }

        pending.set_tie_breaker(id, value)?;
        let mut out = format!("{canonical}: tie-breaker {value}.");
        if pending.is_ready() {
            out.push_str(" All set; 'resolve' when ready.");
        }
        Ok(out)
    }

    fn do_reroll(&mut self, name: &str) -> SessionResult<String> {
        if name.is_empty() {
            return Err(SessionError::Usage("usage: reroll <name>".to_string()));
        }
        let pending = self.pending.as_mut().ok_or(SessionError::NoActiveTie)?;
        let (id, kind, canonical) = find_contender(pending, name)?;

        if kind == EntityKind::Player {
            return Err(SessionError::Usage(format!(
                "{canonical} is a player; type 'tiebreak {canonical} <value>'"
            )));
        }

        let value = pending.roll_tie_breaker(id, &mut self.rng)?;
        let mut out = format!("{canonical} re-rolls: {value}.");
        if pending.is_ready() {
            out.push_str(" All set; 'resolve' when ready.");
        }
        Ok(out)
    }

    fn do_resolve(&mut self) -> SessionResult<String> {
        let pending = self.pending.take().ok_or(SessionError::NoActiveTie)?;
        if !pending.is_ready() {
            let missing = pending
                .contenders()
                .iter()
                .filter(|c| c.tie_breaker == 0)
                .count();
            self.pending = Some(pending);
            return Err(vh_engine::EngineError::TieBreakersMissing(missing).into());
        }

        match pending.finalize(&mut self.roster)? {
            FinalizeOutcome::Resolved => {
                self.autosave();
                Ok(format!("Tie resolved. Turn order:\n{}", self.list_lines()))
            }
            FinalizeOutcome::StillTied(narrowed) => {
                self.autosave();
                let names: Vec<&str> = narrowed
                    .contenders()
                    .iter()
                    .map(|m| m.name.as_str())
                    .collect();
                let out = format!(
                    "Still tied: {}. Tie-breakers reset; enter fresh values.",
                    names.join(", ")
                );
                self.pending = Some(narrowed);
                Ok(out)
            }
        }
    }

    fn do_finish(&mut self) -> SessionResult<String> {
        if self.roster.is_empty() {
            return Err(SessionError::EmptyRoster);
        }

        let summary = format!("Battle finished: {}", self.roster.summary());
        self.archive.record(summary.clone());
        // Archiving mirrors fire-and-forget: a failed write is not a
        // reason to keep the encounter open.
        let _ = self.archive.save(&self.history_path);

        self.pending = None;
        self.roster.clear();
        self.autosave();
        Ok(format!("Archived. {summary}"))
    }

    fn do_clear(&mut self) -> SessionResult<String> {
        self.pending = None;
        self.roster.clear();
        self.autosave();
        Ok("Roster cleared.".to_string())
    }

    fn help() -> String {
        "\
Encounter commands:
  add <template>            Add a participant from the library
  remove <name>             Remove a participant
  hp <name> <amount>        Deal damage (no floor; negatives allowed)
  init <name> <value>       Type a player's initiative (0 clears it)
  mark <name>               Toggle the defeated marker
  list                      Show the roster
  templates                 Show the library
  roll                      Roll initiative for everyone who needs it
  tiebreak <name> <value>   Enter a player's tie-breaker
  reroll <name>             Roll an NPC's tie-breaker (repeatable)
  resolve                   Merge tie-breakers and order the roster
  finish                    Archive the encounter and clear the roster
  clear                     Clear the roster without archiving
  help                      Show this help
  quit                      Exit"
            .to_string()
    }

    fn list_lines(&self) -> String {
        let mut out = String::new();
        for (i, e) in self.roster.entities().iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, describe(e)));
        }
        out.trim_end().to_string()
    }

    fn resolve_id(&self, name: &str) -> SessionResult<EntityId> {
        if name.is_empty() {
            return Err(SessionError::Usage("which name?".to_string()));
        }
        self.roster
            .find_by_name(name)
            .map(|e| e.id)
            .ok_or_else(|| SessionError::UnknownEntity(name.to_string()))
    }

    fn guard_no_tie(&self) -> SessionResult<()> {
        if self.pending.is_some() {
            return Err(SessionError::TieInProgress);
        }
        Ok(())
    }

    fn autosave(&self) {
        // A failed mirror write must never block play.
        let _ = vh_store::save_roster(&self.battle_path, &self.roster);
    }
}

/// One roster line: name, kind affordance, initiative, and NPC hit points.
fn describe(e: &CombatEntity) -> String {
    let init = if e.total == 0 {
        "?".to_string()
    } else {
        e.total.to_string()
    };
    let mut line = match e.kind {
        EntityKind::Player => format!("{} (player), init {init}", e.name),
        EntityKind::Npc => format!("{}, init {init}, {} hp", e.name, e.current_hp),
    };
    if e.is_down() {
        line.push_str(" [down]");
    }
    if e.defeated {
        line.push_str(" [defeated]");
    }
    line
}

/// Parse `<name with spaces> <integer>` from the tail of a command.
fn split_name_value(rest: &str) -> Option<(&str, i32)> {
    let (name, raw) = rest.rsplit_once(' ')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let value = raw.parse().ok()?;
    Some((name, value))
}

/// Look up a contender by name in the open tie session.
fn find_contender(
    pending: &TieResolutionSession,
    name: &str,
) -> SessionResult<(EntityId, EntityKind, String)> {
    pending
        .contenders()
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .map(|c| (c.id, c.kind, c.name.clone()))
        .ok_or_else(|| SessionError::UnknownEntity(name.to_string()))
}
