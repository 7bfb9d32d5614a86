//! Bell-state demo: H on the first qubit of |00⟩, then CNOT.
use anyhow::{anyhow, Result};
use colored::Colorize;

use ketlab::bases::KET_ZERO;
use ketlab::gates::{CNOT, H};
use ketlab::types::{QOp, QState};

fn main() -> Result<()> {
    let q1 = QState::try_new(KET_ZERO.clone(), false).map_err(|e| anyhow!(e))?;
    let q2 = QState::try_new(KET_ZERO.clone(), false).map_err(|e| anyhow!(e))?;

    let h = QOp::try_new_unitary(H.clone()).map_err(|e| anyhow!(e))?;
    let q1 = h.apply(&q1).map_err(|e| anyhow!(e))?;

    let joint = q1.tensor(&q2);

    let cnot = QOp::try_new_unitary(CNOT.clone()).map_err(|e| anyhow!(e))?;
    let bell = cnot.apply(&joint).map_err(|e| anyhow!(e))?;

    println!("{}", "CNOT · (H ⊗ I) |00⟩ =".cyan().bold());
    println!("{}", bell.data);
    Ok(())
}
