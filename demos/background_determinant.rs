// demos/background_determinant.rs
//! Defers the exponential Laplace determinant to a background worker.
//!
//! The core stays synchronous; this is the caller-side pattern for
//! keeping a UI or request loop responsive while a large determinant
//! cooks: submit the matrix to a worker and hold a handle whose await
//! blocks until the value is ready.
//!
//! Run with: cargo run --example background_determinant --features async

use densemat::Matrix;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;

struct DeterminantHandle {
    task: JoinHandle<f64>,
}

impl DeterminantHandle {
    /// Start computing the determinant on a blocking worker thread.
    fn submit(matrix: Matrix) -> Self {
        Self {
            task: tokio::task::spawn_blocking(move || matrix.determinant()),
        }
    }

    /// Probe without blocking.
    fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the worker and take the value.
    async fn value(self) -> f64 {
        self.task.await.expect("determinant worker panicked")
    }
}

#[tokio::main]
async fn main() {
    let mut rng = StdRng::seed_from_u64(582375269);
    let matrix = Matrix::random(9, 9, &mut rng);

    let handle = DeterminantHandle::submit(matrix.clone());
    println!("submitted 9x9 determinant, finished yet: {}", handle.is_finished());

    // The caller is free to do other work here while the worker runs.
    let determinant = handle.value().await;
    println!("matrix:\n{}", matrix.to_text(Some(3)));
    println!("determinant = {}", determinant);
}
