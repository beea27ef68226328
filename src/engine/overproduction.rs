// ==========================================
// 多区域投入产出冲击核算 - 超产压力信号引擎
// ==========================================
// 职责: 比较首类流入实际值与"库存+订单"需求面, 输出带符号压力指标
// 红线: 相等视为零信号, 严禁把并列值圆整成 ±1
// ==========================================
// 符号约定（逐列）:
//   +1  首类流入严格低于该列所有需求面取值（产能富余, 压力为正向）
//   -1  首类流入严格高于该列至少一个需求面取值（短缺压力）
//    0  其余情形（与某取值并列且未超过任何取值）
// 幅度: |订单列和 - 首类流入| ÷ 基准表首行（逐列）
// ==========================================
// 注意: 本引擎不做基准掩码替换（度量的是原始库存压力,
// 而非替换后的产能）; 且只取 VX 首行参与比较, 建模为
// 单一主导流入类别, 与两个产量引擎的全行堆叠不同。
// ==========================================

use crate::domain::{Matrix, MatrixError};
use crate::engine::error::{EngineError, EngineResult};
use tracing::instrument;

// ==========================================
// OverproductionEngine - 超产压力信号引擎
// ==========================================
pub struct OverproductionEngine {
    // 无状态引擎，不需要注入依赖
}

impl OverproductionEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 计算带符号、按基准归一的超产压力信号
    ///
    /// 步骤：
    /// 1) ZX = 库存 ÷ 效率（不做掩码替换）, NN 行
    /// 2) VX = 流入 ÷ 效率, UU 行
    /// 3) OX = 订单逐列求和, 1 行
    /// 4) ZOX = ZX 与 OX 按行堆叠 (NN+1 行)
    /// 5) 每列用 VX 首行值与 ZOX 整列做严格比较得符号
    /// 6) 幅度 = |OX - VX首行| ÷ 基准表首行
    ///
    /// # 参数
    /// - `stock` / `stock_efficiency`: StockMat / E_Z (NN x RR*NN)
    /// - `inflow` / `inflow_efficiency`: IOV_t / E_V (UU x RR*NN)
    /// - `orders`: 订单矩阵（列宽 RR*NN）
    /// - `baseline`: 基准表 IOX_0（首行为归一分母, 零值报错）
    ///
    /// # 返回
    /// 长度 RR*NN 的带符号压力向量
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
    ) -> EngineResult<Vec<f64>> {
        let zx = stock.elementwise_div(stock_efficiency)?;
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
        if baseline.cols() != zx.cols() {
            return Err(EngineError::ColumnMismatch {
                entity: "基准表",
                expected: zx.cols(),
                actual: baseline.cols(),
            });
        }

        let cols = zx.cols();
        let order_sums = orders.column_sums();
        let order_row = Matrix::new(1, cols, order_sums.clone())?;
        let need_stack = Matrix::vstack(&[&zx, &order_row])?;

        let inflow_row = vx.first_row();
        let baseline_row = baseline.first_row();
        let need_rows: Vec<&[f64]> = (0..need_stack.rows())
            .filter_map(|row| need_stack.row(row))
            .collect();

        let mut signal = vec![0.0; cols];
        for col in 0..cols {
            let observed = inflow_row[col];

            // 符号三分: 严格低于全部 => +1; 严格高于任一 => -1; 其余 => 0
            let mut below_all = true;
            let mut above_any = false;
            for need_row in &need_rows {
                let need = need_row[col];
                if observed >= need {
                    below_all = false;
                }
                if observed > need {
                    above_any = true;
                }
            }
            let sign = if below_all {
                1.0
            } else if above_any {
                -1.0
            } else {
                0.0
            };

            // 幅度按基准首行归一, 零基准显式报错
            let normalizer = baseline_row[col];
            if normalizer == 0.0 {
                return Err(EngineError::Matrix(MatrixError::ZeroDivisor {
                    row: 0,
                    col,
                }));
            }
            let magnitude = (order_sums[col] - observed).abs() / normalizer;

            signal[col] = sign * magnitude;
        }

        Ok(signal)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for OverproductionEngine {
    fn default() -> Self {
        Self::new()
    }
}
