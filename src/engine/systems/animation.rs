use crate::pet::{Animation, AnimationKind, Pet};
use crate::time::Timestamp;

/// How long a non-idle animation plays before clearing itself (ms).
const ANIMATION_DURATION_MS: u64 = 2_000;

/// Reset a stale non-idle animation back to idle, with a fresh start time.
///
/// Transient cues are self-clearing - there is no "end interaction" call.
pub fn decay(pet: &mut Pet, now: Timestamp) {
    if pet.animation.kind != AnimationKind::Idle
        && now.millis_since(pet.animation.started_at) > ANIMATION_DURATION_MS
    {
        pet.animation = Animation::idle(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::OwnerId;

    fn dancing_pet(started_at_ms: u64) -> Pet {
        let mut rng = fastrand::Rng::with_seed(21);
        let mut pet = Pet::spawned(
            OwnerId::new("u"),
            "Test".to_owned(),
            String::new(),
            Timestamp::from_millis(started_at_ms),
            &mut rng,
        );
        pet.animation = Animation {
            kind: AnimationKind::Dance,
            started_at: Timestamp::from_millis(started_at_ms),
        };
        pet
    }

    #[test]
    fn stale_animation_resets_to_idle() {
        let mut pet = dancing_pet(1_000);
        decay(&mut pet, Timestamp::from_millis(3_500));

        assert_eq!(pet.animation.kind, AnimationKind::Idle);
        assert_eq!(pet.animation.started_at, Timestamp::from_millis(3_500));
    }

    #[test]
    fn fresh_animation_keeps_playing() {
        let mut pet = dancing_pet(1_000);
        decay(&mut pet, Timestamp::from_millis(2_500));

        assert_eq!(pet.animation.kind, AnimationKind::Dance);
        assert_eq!(pet.animation.started_at, Timestamp::from_millis(1_000));
    }

    #[test]
    fn idle_animation_is_left_alone() {
        let mut pet = dancing_pet(1_000);
        pet.animation = Animation::idle(Timestamp::from_millis(1_000));
        decay(&mut pet, Timestamp::from_millis(60_000));

        // Start time untouched - no churn on already-idle pets.
        assert_eq!(pet.animation.started_at, Timestamp::from_millis(1_000));
    }
}
