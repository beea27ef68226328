// ==========================================
// 多区域投入产出冲击核算 - 理论产能上限引擎
// ==========================================
// 职责: 忽略订单约束, 仅取库存约束与流入约束的逐列最小值
// ==========================================
// 说明: 堆叠行集是实际产量引擎的真子集（去掉订单行）,
// 因此每列结果恒 ≥ 实际产量引擎的结果。
// ==========================================

use crate::domain::{BaselineMask, Matrix};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::stock_constraint::StockConstraint;
use tracing::instrument;

// ==========================================
// MaxProductionEngine - 理论产能上限引擎
// ==========================================
pub struct MaxProductionEngine {
    stock_constraint: StockConstraint,
}

impl MaxProductionEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            stock_constraint: StockConstraint::new(),
        }
    }

    /// 计算不考虑需求的理论最大可产量
    ///
    /// 与实际产量引擎的步骤 1-2 完全一致（含基准替换）,
    /// 但不堆叠订单行。
    ///
    /// # 参数
    /// - `stock` / `stock_efficiency`: StockMat / E_CZ (NN x RR*NN)
    /// - `inflow` / `inflow_efficiency`: IOV_t / E_VA (UU x RR*NN)
    /// - `baseline`: 基准表 IOX_0
    /// - `mask`: 基准替换掩码
    ///
    /// # 返回
    /// 长度 RR*NN 的产能上限向量
    #[instrument(skip_all, fields(
        sectors = stock.rows(),
        columns = stock.cols(),
        flow_categories = inflow.rows()
    ))]
    pub fn compute(
        &self,
        stock: &Matrix,
        stock_efficiency: &Matrix,
        inflow: &Matrix,
        inflow_efficiency: &Matrix,
        baseline: &Matrix,
        mask: &BaselineMask,
    ) -> EngineResult<Vec<f64>> {
        let zx = self
            .stock_constraint
            .apply(stock, stock_efficiency, baseline, mask)?;
        let vx = inflow.elementwise_div(inflow_efficiency)?;

        if vx.cols() != zx.cols() {
            return Err(EngineError::ColumnMismatch {
                entity: "流入矩阵",
                expected: zx.cols(),
                actual: vx.cols(),
            });
        }

        let stacked = Matrix::vstack(&[&zx, &vx])?;
        Ok(stacked.column_mins())
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for MaxProductionEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_single_cell_literal_scenario() {
        // 测试：掩码命中单列, 基准 4 × 1.25 = 5, 与库存比值同值
        // min(5, 2) = 2
        let engine = MaxProductionEngine::new();
        let stock = Matrix::from_rows(vec![vec![10.0]]).unwrap();
        let e_cz = Matrix::from_rows(vec![vec![2.0]]).unwrap();
        let inflow = Matrix::from_rows(vec![vec![8.0]]).unwrap();
        let e_va = Matrix::from_rows(vec![vec![4.0]]).unwrap();
        let baseline = Matrix::from_rows(vec![vec![4.0]]).unwrap();
        let mask = BaselineMask::new(vec![(0, 0)]);

        let output = engine
            .compute(&stock, &e_cz, &inflow, &e_va, &baseline, &mask)
            .unwrap();
        assert_eq!(output, vec![2.0]);
    }

    #[test]
    fn test_ignores_order_constraint() {
        // 测试：上限只受库存/流入约束
        let engine = MaxProductionEngine::new();
        let stock = Matrix::from_rows(vec![vec![12.0, 20.0]]).unwrap();
        let e_cz = Matrix::from_rows(vec![vec![2.0, 4.0]]).unwrap();
        let inflow = Matrix::from_rows(vec![vec![9.0, 4.0]]).unwrap();
        let e_va = Matrix::from_rows(vec![vec![3.0, 1.0]]).unwrap();
        let baseline = Matrix::from_rows(vec![vec![1.0, 1.0]]).unwrap();

        let output = engine
            .compute(&stock, &e_cz, &inflow, &e_va, &baseline, &BaselineMask::empty())
            .unwrap();
        // 列0: min(6, 3) = 3; 列1: min(5, 4) = 4
        assert_eq!(output, vec![3.0, 4.0]);
    }
}
