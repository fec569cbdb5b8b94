//! Progress and deadlines of savings goals.

use time::Date;

use crate::goal::Goal;

/// Goals due in fewer days than this are highlighted.
pub const DUE_SOON_DAYS: i64 = 30;

/// How much of a goal has been saved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// How much of the target has been saved, from 0 to 100.
    pub percent: f64,
    /// Whether the saved amount has reached the target.
    pub completed: bool,
}

/// How far along `goal` is.
///
/// A goal without a positive target has no meaningful progress and is
/// reported as 0% and not completed.
pub fn goal_progress(goal: &Goal) -> GoalProgress {
    if goal.target_amount <= 0.0 {
        return GoalProgress {
            percent: 0.0,
            completed: false,
        };
    }

    let percent = (goal.current_amount / goal.target_amount * 100.0).clamp(0.0, 100.0);

    GoalProgress {
        percent,
        completed: goal.current_amount >= goal.target_amount,
    }
}

/// Totals across every goal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GoalSummary {
    /// Goals that have not reached their target.
    pub active: usize,
    /// Goals that have reached their target.
    pub completed: usize,
    /// The sum of every target.
    pub total_target: f64,
    /// The sum of every saved amount.
    pub total_saved: f64,
}

/// Count active and completed goals and sum their amounts.
pub fn goal_summary(goals: &[Goal]) -> GoalSummary {
    goals
        .iter()
        .fold(GoalSummary::default(), |mut summary, goal| {
            if goal_progress(goal).completed {
                summary.completed += 1;
            } else {
                summary.active += 1;
            }

            summary.total_target += goal.target_amount;
            summary.total_saved += goal.current_amount;
            summary
        })
}

/// Whole days from `today` until `deadline`. Negative when the deadline has passed.
pub fn days_remaining(deadline: Date, today: Date) -> i64 {
    (deadline - today).whole_days()
}

/// How close a deadline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    /// The deadline passed this many days ago.
    Overdue(i64),
    /// Fewer than [DUE_SOON_DAYS] days remain.
    DueSoon(i64),
    /// Plenty of days remain.
    OnTime(i64),
}

impl DeadlineStatus {
    /// The status of `deadline` as seen from `today`.
    pub fn new(deadline: Date, today: Date) -> Self {
        let days = days_remaining(deadline, today);

        if days < 0 {
            DeadlineStatus::Overdue(-days)
        } else if days < DUE_SOON_DAYS {
            DeadlineStatus::DueSoon(days)
        } else {
            DeadlineStatus::OnTime(days)
        }
    }

    /// How many days are left or overdue, in words.
    pub fn label(self) -> String {
        match self {
            DeadlineStatus::Overdue(days) => format!("{days} dias em atraso"),
            DeadlineStatus::DueSoon(days) | DeadlineStatus::OnTime(days) => {
                format!("{days} dias restantes")
            }
        }
    }
}
