//! Job queue transitions: Idle → Running → (reward) → Idle.

use super::state::{find_job, JobBoard, JobSlot};
use crate::economy::Effect;
use crate::error::{Outcome, Rejection};

/// Start job `id` if the slot is free and `level` meets the requirement.
pub fn start(board: &mut JobBoard, level: u32, id: &str) -> Outcome {
    let job = find_job(id).ok_or(Rejection::UnknownId)?;
    if board.is_busy() {
        return Err(Rejection::SlotBusy);
    }
    if level < job.level_required {
        return Err(Rejection::LevelTooLow);
    }
    board.slot = JobSlot::Running {
        job,
        elapsed_ticks: 0,
    };
    log::debug!("job {} started ({} ticks)", job.id, job.total_ticks());
    Ok(Effect::none())
}

/// Advance the running job by one tick. Returns the reward on the tick that
/// completes it; the slot is Idle afterwards, so the reward cannot repeat.
pub fn advance(board: &mut JobBoard) -> Option<Effect> {
    let (job, elapsed) = match &mut board.slot {
        JobSlot::Idle => return None,
        JobSlot::Running { job, elapsed_ticks } => {
            *elapsed_ticks += 1;
            (*job, *elapsed_ticks)
        }
    };
    if elapsed < job.total_ticks() {
        return None;
    }
    board.slot = JobSlot::Idle;
    board.last_completed = Some(job.id);
    board.completed_runs += 1;
    log::info!("job {} complete: +{} CR, +{} XP", job.id, job.reward, job.xp_reward);
    Some(Effect::credit(job.reward).with_xp(job.xp_reward))
}
