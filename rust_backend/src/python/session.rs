use pyo3::prelude::*;

use super::angles::to_py_err;
use crate::config::QuizConfig;
use crate::services::QuizSession;

/// Python wrapper for QuizSession
#[pyclass(name = "QuizSession")]
#[derive(Debug, Clone, Default)]
pub struct PyQuizSession {
    inner: QuizSession,
}

#[pymethods]
impl PyQuizSession {
    #[new]
    #[pyo3(signature = (config_path = None))]
    fn py_new(config_path: Option<&str>) -> PyResult<Self> {
        let config = match config_path {
            Some(path) => QuizConfig::from_file(path).map_err(to_py_err)?,
            None => QuizConfig::default(),
        };
        Ok(Self {
            inner: QuizSession::new(config),
        })
    }

    #[getter]
    fn mode(&self) -> &'static str {
        self.inner.current_angle_mode().as_str()
    }

    #[getter]
    fn focused_input(&self) -> Option<usize> {
        self.inner.currently_focused_input()
    }

    #[getter]
    fn max_length(&self) -> usize {
        self.inner.max_length_for_input_box()
    }

    #[getter]
    fn correct_ids(&self) -> Vec<usize> {
        self.inner.correct_input_ids().iter().copied().collect()
    }

    fn focus_input(&mut self, id: usize) -> PyResult<()> {
        self.inner.focus_input(id).map_err(to_py_err)
    }

    fn type_into(&mut self, id: usize, text: &str) -> PyResult<String> {
        self.inner
            .type_into(id, text)
            .map(str::to_string)
            .map_err(to_py_err)
    }

    fn set_input(&mut self, id: usize, text: &str) -> PyResult<String> {
        self.inner
            .set_input(id, text)
            .map(str::to_string)
            .map_err(to_py_err)
    }

    fn is_locked(&self, id: usize) -> bool {
        self.inner.is_locked(id)
    }

    fn check_answers(&mut self) -> Vec<usize> {
        self.inner.check_answers()
    }

    fn switch_angle_mode(&mut self) {
        self.inner.switch_angle_mode()
    }

    fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }

    fn __repr__(&self) -> String {
        let (correct, total) = self.inner.score();
        format!(
            "QuizSession(mode={}, correct={}/{})",
            self.inner.current_angle_mode(),
            correct,
            total
        )
    }
}
