//! Ringpuffer der zuletzt ausgeführten Commands.
//!
//! Einträge sind redigierte Kurzbeschreibungen (`AppCommand::summary`),
//! Zugangsdaten landen nie im Log.

use super::AppCommand;
use std::collections::VecDeque;

const CAPACITY: usize = 512;

/// Ausgeführte Commands mit fortlaufender Nummer.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<(u64, String)>,
    next_seq: u64,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Command an; bei vollem Puffer fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back((self.next_seq, command.summary()));
        self.next_seq += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller jemals protokollierten Commands.
    pub fn total_recorded(&self) -> u64 {
        self.next_seq
    }

    /// Kurzbeschreibungen, älteste zuerst.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, summary)| summary.as_str())
    }

    /// Die letzten `count` Einträge mit Sequenznummer.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = (u64, &str)> {
        let skip = self.entries.len().saturating_sub(count);
        self.entries
            .iter()
            .skip(skip)
            .map(|(seq, summary)| (*seq, summary.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_fall_out_when_full() {
        let mut log = CommandLog::new();
        for _ in 0..CAPACITY {
            log.record(&AppCommand::ClearSelection);
        }
        log.record(&AppCommand::ResetCamera);

        assert_eq!(log.len(), CAPACITY);
        assert_eq!(log.total_recorded(), CAPACITY as u64 + 1);
        let last: Vec<(u64, &str)> = log.recent(1).collect();
        assert_eq!(last, vec![(CAPACITY as u64, "ResetCamera")]);
        assert_eq!(log.recent(5).next().map(|(seq, _)| seq), Some(CAPACITY as u64 - 4));
    }
}
