use gate_rs::journal::{InMemoryJournal, Journal};
use gate_rs::replay::ReplayEngine;
use gate_rs::{Gate, LineKind, PersonId, ServicePattern};
use std::sync::{Arc, Mutex};

#[cfg(test)]
mod tests {
    use super::*;

    fn journaled_gate(pattern: ServicePattern) -> (Gate<PersonId>, Arc<Mutex<InMemoryJournal<PersonId>>>) {
        let journal = Arc::new(Mutex::new(InMemoryJournal::new()));
        let sink = Arc::clone(&journal);
        let mut gate = Gate::with_pattern(pattern);
        gate.add_listener(move |event| {
            sink.lock().unwrap().append(event.clone()).unwrap();
        });
        (gate, journal)
    }

    #[test]
    fn test_journal_replay_matches_live_gate() {
        let (mut gate, journal) = journaled_gate(ServicePattern::default());

        for i in 0..40 {
            let line = if i % 3 == 0 {
                LineKind::Fastpass
            } else {
                LineKind::Regular
            };
            gate.arrive_in(line, PersonId::new());
            if i % 2 == 1 {
                gate.serve().unwrap();
            }
        }
        gate.serve().unwrap();

        let journal = journal.lock().unwrap();
        assert_eq!(journal.len() as u64, gate.last_sequence());

        let (replayed, last_seq) =
            ReplayEngine::replay(&*journal, ServicePattern::default()).unwrap();
        assert_eq!(last_seq, gate.last_sequence());
        assert_eq!(replayed.snapshot(), gate.snapshot());
        assert!(ReplayEngine::verify(&*journal, &gate.snapshot()).unwrap());
    }

    #[test]
    fn test_snapshot_checksum_survives_restore() {
        let pattern =
            ServicePattern::new(vec![LineKind::Fastpass, LineKind::Fastpass, LineKind::Regular])
                .unwrap();
        let (mut gate, _journal) = journaled_gate(pattern);
        for _ in 0..5 {
            gate.arrive("fastpass", PersonId::new()).unwrap();
            gate.arrive("regular", PersonId::new()).unwrap();
        }
        gate.serve().unwrap();
        gate.serve().unwrap();

        let snapshot = gate.snapshot();
        let checksum = snapshot.checksum().unwrap();

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: Gate<PersonId> =
            Gate::from_snapshot(serde_json::from_str(&json).unwrap()).unwrap();
        assert_eq!(restored.snapshot().checksum().unwrap(), checksum);
        assert_eq!(restored.peek_next_line(), gate.peek_next_line());
    }
}
