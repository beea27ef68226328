// ==========================================
// 多区域投入产出冲击核算 - 基准替换掩码
// ==========================================
// 职责: 标记哪些"投入部门 × 部门-区域"单元不具备库存比值含义,
//       必须改用基准表行的固定倍数（如自耗/无定义生产路径单元）
// 红线: 一次构建, 只读共享; 引擎内部不得修改
// ==========================================
// 说明: 掩码由仿真初始化阶段预先计算（本库不负责推导）,
// 以显式参数传入各引擎, 不使用全局可变状态。
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// BaselineMask - 基准替换掩码
// ==========================================
/// 需要被基准值覆盖的 (行, 列) 坐标集合
///
/// 行 ∈ [0, NN), 列 ∈ [0, RR*NN)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineMask {
    cells: Vec<(usize, usize)>,
}

impl BaselineMask {
    /// 构造掩码（保留调用方给定的坐标顺序）
    pub fn new(cells: Vec<(usize, usize)>) -> Self {
        Self { cells }
    }

    /// 空掩码（不做任何替换）
    pub fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    /// 坐标数量
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 遍历所有坐标
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied()
    }

    /// 校验所有坐标落在 rows x cols 边界内
    ///
    /// # 返回
    /// 第一个越界坐标（若有）
    pub fn first_out_of_range(&self, rows: usize, cols: usize) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .copied()
            .find(|&(r, c)| r >= rows || c >= cols)
    }
}
