/// Status substring that disqualifies a work regardless of its completion flag.
const ONESHOT_MARKER: &str = "Oneshot";

/// A work makes it into the montage iff it is completed and not a one-shot.
pub fn is_eligible(completed: bool, status: &str) -> bool {
    completed && !status.contains(ONESHOT_MARKER)
}
