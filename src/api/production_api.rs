// ==========================================
// 多区域投入产出冲击核算 - 对外核算接口
// ==========================================
// 职责: 以三个纯函数包装引擎层, 供外部时间步进驱动器逐期调用
// 红线: 纯只读变换, 同参重算结果逐位一致; 无内部持久状态
// ==========================================
// 调用方约定: 维度常数与基准掩码在仿真初始化阶段一次性
// 构建（见 config 层）, 各期仅更新库存/流入/订单矩阵。
// ==========================================

use crate::domain::{BaselineMask, Matrix};
use crate::engine::{
    EngineResult, MaxProductionEngine, OverproductionEngine, ProductionEngine,
};

/// 计算各部门-区域受约束的实际产量
///
/// 逐列取"基准替换后库存比值 / 流入比值 / 订单列和"的最小值
///
/// # 参数
/// - `stock` / `stock_efficiency`: StockMat / E_CZ
/// - `inflow` / `inflow_efficiency`: IOV_t / E_VA
/// - `orders`: 订单矩阵
/// - `baseline`: 基准表 IOX_0
/// - `mask`: 基准替换掩码（mat.key 的显式化）
///
/// # 返回
/// 长度 RR*NN 的产量向量
pub fn compute_production(
    stock: &Matrix,
    stock_efficiency: &Matrix,
    inflow: &Matrix,
    inflow_efficiency: &Matrix,
    orders: &Matrix,
    baseline: &Matrix,
    mask: &BaselineMask,
) -> EngineResult<Vec<f64>> {
    ProductionEngine::new().compute(
        stock,
        stock_efficiency,
        inflow,
        inflow_efficiency,
        orders,
        baseline,
        mask,
    )
}

/// 计算各部门-区域不考虑需求的理论产能上限
///
/// 与 [`compute_production`] 相比不堆叠订单行, 因此逐列恒不小于前者
pub fn compute_max_production(
    stock: &Matrix,
    stock_efficiency: &Matrix,
    inflow: &Matrix,
    inflow_efficiency: &Matrix,
    baseline: &Matrix,
    mask: &BaselineMask,
) -> EngineResult<Vec<f64>> {
    MaxProductionEngine::new().compute(
        stock,
        stock_efficiency,
        inflow,
        inflow_efficiency,
        baseline,
        mask,
    )
}

/// 计算各部门-区域的带符号超产压力信号
///
/// 符号: 首类流入严格低于全部需求面取 +1, 严格高于任一取 -1, 并列取 0;
/// 幅度: |订单列和 - 首类流入| ÷ 基准表首行。
/// 本函数不做基准掩码替换（度量原始库存压力）。
pub fn compute_overproduction_signal(
    stock: &Matrix,
    stock_efficiency: &Matrix,
    inflow: &Matrix,
    inflow_efficiency: &Matrix,
    orders: &Matrix,
    baseline: &Matrix,
) -> EngineResult<Vec<f64>> {
    OverproductionEngine::new().compute(
        stock,
        stock_efficiency,
        inflow,
        inflow_efficiency,
        orders,
        baseline,
    )
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_matches_engines() {
        // 接口函数与引擎直接调用结果一致
        let stock = Matrix::from_rows(vec![vec![10.0]]).unwrap();
        let e = Matrix::from_rows(vec![vec![2.0]]).unwrap();
        let inflow = Matrix::from_rows(vec![vec![8.0]]).unwrap();
        let e_v = Matrix::from_rows(vec![vec![4.0]]).unwrap();
        let orders = Matrix::from_rows(vec![vec![3.0]]).unwrap();
        let baseline = Matrix::from_rows(vec![vec![4.0]]).unwrap();
        let mask = BaselineMask::empty();

        let production =
            compute_production(&stock, &e, &inflow, &e_v, &orders, &baseline, &mask).unwrap();
        let ceiling =
            compute_max_production(&stock, &e, &inflow, &e_v, &baseline, &mask).unwrap();
        let signal =
            compute_overproduction_signal(&stock, &e, &inflow, &e_v, &orders, &baseline).unwrap();

        assert_eq!(production, vec![2.0]);
        assert_eq!(ceiling, vec![2.0]);
        // VX首行 2 < [5, 3] 全部 => +1; |3-2|/4 = 0.25
        assert_eq!(signal, vec![0.25]);
    }
}
