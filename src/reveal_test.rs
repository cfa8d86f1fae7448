use super::*;

fn hit(id: RevealId) -> BatchEntry {
    BatchEntry { id, intersecting: true }
}

fn miss(id: RevealId) -> BatchEntry {
    BatchEntry { id, intersecting: false }
}

fn tracker_with(n: usize) -> RevealTracker {
    let mut tracker = RevealTracker::new();
    for _ in 0..n {
        tracker.track();
    }
    tracker
}

#[test]
fn track_assigns_sequential_ids() {
    let mut tracker = RevealTracker::new();
    assert_eq!(tracker.track(), 0);
    assert_eq!(tracker.track(), 1);
    assert_eq!(tracker.pending_count(), 2);
}

#[test]
fn batch_staggers_by_position() {
    let mut tracker = tracker_with(3);
    let reveals = tracker.on_batch(&[hit(0), hit(1), hit(2)]);
    let delays: Vec<f64> = reveals.iter().map(|r| r.delay_s).collect();
    assert_eq!(delays, vec![0.0, 0.1, 0.2]);
    assert_eq!(reveals[0].animation(), "fadeInUp 0.6s ease-out 0s forwards");
    assert_eq!(reveals[1].animation(), "fadeInUp 0.6s ease-out 0.1s forwards");
}

#[test]
fn separate_batches_restart_stagger() {
    let mut tracker = tracker_with(2);
    let first = tracker.on_batch(&[hit(0)]);
    let second = tracker.on_batch(&[hit(1)]);
    assert_eq!(first[0].delay_s, 0.0);
    assert_eq!(second[0].delay_s, 0.0);
}

#[test]
fn non_intersecting_entries_still_count_toward_position() {
    let mut tracker = tracker_with(2);
    let reveals = tracker.on_batch(&[miss(0), hit(1)]);
    assert_eq!(reveals.len(), 1);
    assert_eq!(reveals[0].id, 1);
    assert_eq!(reveals[0].delay_s, 0.1);
    assert!(tracker.is_pending(0));
}

#[test]
fn revealed_element_never_animates_again() {
    let mut tracker = tracker_with(1);
    assert_eq!(tracker.on_batch(&[hit(0)]).len(), 1);
    assert!(!tracker.is_pending(0));
    assert!(tracker.on_batch(&[hit(0)]).is_empty());
    assert!(tracker.on_batch(&[miss(0), hit(0)]).is_empty());
    assert_eq!(tracker.pending_count(), 0);
}

#[test]
fn unknown_id_is_ignored() {
    let mut tracker = tracker_with(1);
    assert!(tracker.on_batch(&[hit(7)]).is_empty());
    assert!(!tracker.is_pending(7));
}

// =============================================================
// Element ids
// =============================================================

#[test]
fn parse_id_reads_tracked_ids() {
    let mut tracker = tracker_with(3);
    let id = tracker.track();
    assert_eq!(parse_id(&id.to_string()), Some(3));
    assert_eq!(parse_id(" 12 "), Some(12));
}

#[test]
fn parse_id_rejects_foreign_values() {
    assert_eq!(parse_id(""), None);
    assert_eq!(parse_id("-1"), None);
    assert_eq!(parse_id("hero"), None);
}

#[test]
fn batch_of_parsed_ids_reveals_each_once() {
    let mut tracker = tracker_with(4);
    let entries: Vec<BatchEntry> = ["2", "0", "bogus", "3"]
        .iter()
        .filter_map(|raw| parse_id(raw))
        .map(hit)
        .collect();
    let revealed: Vec<RevealId> = tracker.on_batch(&entries).iter().map(|r| r.id).collect();
    assert_eq!(revealed, vec![2, 0, 3]);
    assert_eq!(tracker.pending_count(), 1);
    assert!(tracker.is_pending(1));
}
