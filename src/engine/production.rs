// ==========================================
// 多区域投入产出冲击核算 - 实际产量引擎
// ==========================================
// 职责: 库存约束 × 流入约束 × 订单约束的逐列最小值
// 红线: 约束取最小, 不允许任何列超过其最紧约束
// ==========================================
// 输入: 库存/效率 + 流入/效率 + 订单矩阵 + 基准表 + 掩码
// 输出: 每个部门-区域的实际产量向量 (宽度 RR*NN)
// ==========================================

use crate::domain::{BaselineMask, Matrix};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::stock_constraint::StockConstraint;
use tracing::instrument;

// ==========================================
// ProductionEngine - 实际产量引擎
// ==========================================
pub struct ProductionEngine {
    stock_constraint: StockConstraint,
}

impl ProductionEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            stock_constraint: StockConstraint::new(),
        }
    }

    /// 计算受约束的实际产量
    ///
    /// 步骤：
    /// 1) ZX = 库存约束引擎输出（含基准替换）, NN 行
    /// 2) VX = 流入 ÷ 效率, UU 行
    /// 3) OX = 订单矩阵逐列求和, 1 行
    /// 4) 三者按行堆叠后取逐列最小值
    ///
    /// # 参数
    /// - `stock` / `stock_efficiency`: StockMat / E_CZ (NN x RR*NN)
    /// - `inflow` / `inflow_efficiency`: IOV_t / E_VA (UU x RR*NN)
    /// - `orders`: 订单矩阵（行为订单来源, 列宽 RR*NN）
    /// - `baseline`: 基准表 IOX_0
    /// - `mask`: 基准替换掩码
    ///
    /// # 返回
    /// 长度 RR*NN 的产量向量, 每列等于该列最紧约束值
    #[instrument(skip_all, fields(
        sectors = stock.rows(),
        columns = stock.cols(),
        flow_categories = inflow.rows(),
        order_sources = orders.rows()
    ))]
    pub fn compute(
        &self,
        stock: &Matrix,
        stock_efficiency: &Matrix,
        inflow: &Matrix,
        inflow_efficiency: &Matrix,
        orders: &Matrix,
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
        if orders.cols() != zx.cols() {
            return Err(EngineError::ColumnMismatch {
                entity: "订单矩阵",
                expected: zx.cols(),
                actual: orders.cols(),
            });
        }

        let order_row = Matrix::new(1, orders.cols(), orders.column_sums())?;
        let stacked = Matrix::vstack(&[&zx, &vx, &order_row])?;
        Ok(stacked.column_mins())
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ProductionEngine {
    fn default() -> Self {
        Self::new()
    }
}
