use crate::config::F;

/// Итог расчета: Idle -> Stepping -> {Completed | Diverged}
///
/// Расходимость -- штатный исход, а не ошибка: вызывающий код сам решает,
/// допустима ли она (например, при сканировании параметров).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunStatus {
    Completed {
        steps: usize,
        t: F,
        recorded: usize,
    },
    /// на шаге `step` решение перестало быть конечным; ряд обрезан до
    /// `recorded` записанных срезов, состояние -- последний конечный шаг
    Diverged {
        step: usize,
        t: F,
        recorded: usize,
    },
}

impl RunStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    pub fn is_diverged(&self) -> bool {
        matches!(self, Self::Diverged { .. })
    }

    /// число записанных срезов без начального условия
    pub fn recorded(&self) -> usize {
        match *self {
            Self::Completed { recorded, .. } | Self::Diverged { recorded, .. } => recorded,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed { .. } => "Completed",
            Self::Diverged { .. } => "Diverged",
        }
    }
}
