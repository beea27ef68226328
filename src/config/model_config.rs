// ==========================================
// 多区域投入产出冲击核算 - 模型配置
// ==========================================
// 职责: 承载整轮仿真固定不变的维度常数与基准替换掩码
// 红线: 配置在仿真初始化阶段一次性构建并校验, 之后只读
// ==========================================
// 存储: JSON 工件（由上游仿真准备工具生成）
// ==========================================

use crate::domain::BaselineMask;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ==========================================
// 配置层错误类型
// ==========================================
/// 配置校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 维度常数必须全部为正
    #[error("非法维度: NN={sectors}, RR={regions}, UU={flow_categories} 含零值")]
    InvalidDimensions {
        sectors: usize,
        regions: usize,
        flow_categories: usize,
    },

    /// 掩码坐标超出 NN x (RR*NN) 边界
    #[error("掩码坐标越界: ({row},{col}) 超出 {rows}x{cols}")]
    MaskOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

// ==========================================
// ModelDimensions - 维度常数
// ==========================================
/// 整轮仿真固定的维度配置
///
/// - `sectors`: 部门数 NN
/// - `regions`: 区域数 RR
/// - `flow_categories`: 流入/流出类别数 UU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDimensions {
    pub sectors: usize,
    pub regions: usize,
    pub flow_categories: usize,
}

impl ModelDimensions {
    /// 构造并校验维度
    pub fn new(sectors: usize, regions: usize, flow_categories: usize) -> Result<Self, ConfigError> {
        let dims = Self {
            sectors,
            regions,
            flow_categories,
        };
        dims.validate()?;
        Ok(dims)
    }

    /// 校验所有维度为正
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sectors == 0 || self.regions == 0 || self.flow_categories == 0 {
            return Err(ConfigError::InvalidDimensions {
                sectors: self.sectors,
                regions: self.regions,
                flow_categories: self.flow_categories,
            });
        }
        Ok(())
    }

    /// 部门-区域列宽（= RR*NN）
    pub fn columns(&self) -> usize {
        self.regions * self.sectors
    }
}

// ==========================================
// ModelConfig - 模型配置
// ==========================================
/// 维度常数 + 基准替换掩码的组合配置
///
/// 掩码（mat.key 的显式化）由上游预计算, 本库只校验边界
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub dimensions: ModelDimensions,
    pub baseline_mask: BaselineMask,
}

impl ModelConfig {
    /// 构造并校验配置
    pub fn new(dimensions: ModelDimensions, baseline_mask: BaselineMask) -> Result<Self, ConfigError> {
        let config = Self {
            dimensions,
            baseline_mask,
        };
        config.validate()?;
        Ok(config)
    }

    /// 校验维度与掩码边界
    ///
    /// 掩码作用于库存比值矩阵 ZX, 形状为 NN x (RR*NN)
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dimensions.validate()?;
        let rows = self.dimensions.sectors;
        let cols = self.dimensions.columns();
        if let Some((row, col)) = self.baseline_mask.first_out_of_range(rows, cols) {
            return Err(ConfigError::MaskOutOfRange {
                row,
                col,
                rows,
                cols,
            });
        }
        Ok(())
    }

    /// 从 JSON 字符串加载并校验
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: ModelConfig =
            serde_json::from_str(json).context("模型配置 JSON 解析失败")?;
        config.validate().context("模型配置校验失败")?;
        Ok(config)
    }

    /// 从 JSON 文件加载并校验
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("模型配置文件读取失败: {}", path.display()))?;
        Self::from_json_str(&json)
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_columns() {
        let dims = ModelDimensions::new(3, 2, 4).unwrap();
        assert_eq!(dims.columns(), 6); // RR*NN = 2*3
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            ModelDimensions::new(0, 2, 1),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_mask_bounds_validated() {
        // 维度 NN=2, RR=2 => ZX 形状 2x4
        let dims = ModelDimensions::new(2, 2, 1).unwrap();
        let ok = ModelConfig::new(dims, BaselineMask::new(vec![(1, 3)]));
        assert!(ok.is_ok());

        let bad = ModelConfig::new(dims, BaselineMask::new(vec![(2, 0)]));
        assert_eq!(
            bad,
            Err(ConfigError::MaskOutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 4
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let dims = ModelDimensions::new(2, 3, 2).unwrap();
        let config = ModelConfig::new(dims, BaselineMask::new(vec![(0, 1), (1, 4)])).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let loaded = ModelConfig::from_json_str(&json).unwrap();
        assert_eq!(loaded, config);
    }
}
