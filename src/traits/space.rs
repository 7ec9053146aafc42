use crate::config::F;
use crate::error::KsError;

/// Трейт для пространственной (или спектральной) сетки размерности D
pub trait Space<const D: usize> {
    /// Возвращает узел сетки по индексу
    fn point(&self, index: [usize; D]) -> [F; D];

    /// Число узлов вдоль каждой оси
    fn shape(&self) -> [usize; D];

    /// Сохраняет сетку в директорию в формате npy
    fn save_as_npy(&self, dir_path: &str) -> Result<(), KsError>;
}
