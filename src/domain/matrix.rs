// ==========================================
// 多区域投入产出冲击核算 - 稠密矩阵领域模型
// ==========================================
// 职责: 行优先稠密 f64 矩阵, 提供逐元素运算与列向归约
// 红线: 所有形状错误必须显式报错, 不允许隐式广播
// ==========================================
// 说明: 部门数 NN / 区域数 RR / 流入类别数 UU 都是小常数,
// 列宽固定为 RR*NN, 稠密存储即可, 不需要稀疏表示。
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// 矩阵层错误类型
// ==========================================
/// 矩阵运算错误
/// 所有错误信息必须包含显式坐标/形状（可解释性红线）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// 两个操作数形状不一致
    #[error("维度不匹配: 期望{expected_rows}x{expected_cols}, 实际{actual_rows}x{actual_cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    /// 坐标超出矩阵边界
    #[error("索引越界: ({row},{col}) 超出 {rows}x{cols}")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// 逐元素除法遇到零除数（效率系数为零 / 基准归一项为零）
    #[error("零除数: ({row},{col}) 处除数为0")]
    ZeroDivisor { row: usize, col: usize },

    /// 行广播的来源矩阵必须恰好只有一行
    #[error("行广播来源必须为单行矩阵: 实际{rows}行")]
    BroadcastSourceNotSingleRow { rows: usize },

    /// 数据长度与声明形状不符
    #[error("数据长度不符: 期望{expected}个元素, 实际{actual}个")]
    DataLength { expected: usize, actual: usize },

    /// 形状含零维（空矩阵无定义）
    #[error("非法形状: {rows}x{cols} 含零维")]
    ZeroDimension { rows: usize, cols: usize },

    /// 行堆叠输入为空
    #[error("行堆叠输入为空")]
    EmptyStack,
}

/// Result 类型别名
pub type MatrixResult<T> = Result<T, MatrixError>;

// ==========================================
// Matrix - 稠密矩阵
// ==========================================
// 存储: 行优先 Vec<f64>
// 列语义: 每列对应一个"部门-区域"单元
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// 构造矩阵（校验形状与数据长度）
    ///
    /// # 参数
    /// - `rows`: 行数（>0）
    /// - `cols`: 列数（>0）
    /// - `data`: 行优先元素, 长度必须等于 rows*cols
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> MatrixResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::ZeroDimension { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MatrixError::DataLength {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// 构造全零矩阵
    pub fn zeros(rows: usize, cols: usize) -> MatrixResult<Self> {
        Self::new(rows, cols, vec![0.0; rows * cols])
    }

    /// 从行向量列表构造（各行长度必须一致）
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MatrixResult<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map(|r| r.len()).unwrap_or(0);
        if row_count == 0 || col_count == 0 {
            return Err(MatrixError::ZeroDimension {
                rows: row_count,
                cols: col_count,
            });
        }
        let mut data = Vec::with_capacity(row_count * col_count);
        for row in &rows {
            if row.len() != col_count {
                return Err(MatrixError::DimensionMismatch {
                    expected_rows: row_count,
                    expected_cols: col_count,
                    actual_rows: row_count,
                    actual_cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(row_count, col_count, data)
    }

    /// 行数
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 列数（= RR*NN）
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 读取元素
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// 写入元素（越界报错）
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> MatrixResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// 取一行切片
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// 首行切片（矩阵至少一行, 由构造校验保证）
    pub fn first_row(&self) -> &[f64] {
        &self.data[..self.cols]
    }

    /// 取一行构成单行矩阵
    pub fn row_matrix(&self, row: usize) -> MatrixResult<Matrix> {
        let slice = self.row(row).ok_or(MatrixError::IndexOutOfRange {
            row,
            col: 0,
            rows: self.rows,
            cols: self.cols,
        })?;
        Matrix::new(1, self.cols, slice.to_vec())
    }

    /// 形状一致性检查（内部通用前置校验）
    fn check_same_shape(&self, other: &Matrix) -> MatrixResult<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                actual_rows: other.rows,
                actual_cols: other.cols,
            });
        }
        Ok(())
    }

    // ==========================================
    // 逐元素运算
    // ==========================================

    /// 逐元素除法（非矩阵除法）
    ///
    /// 零除数策略: 显式报错, 不产生无穷值
    ///
    /// # 参数
    /// - `divisor`: 除数矩阵, 形状必须与本矩阵一致
    pub fn elementwise_div(&self, divisor: &Matrix) -> MatrixResult<Matrix> {
        self.check_same_shape(divisor)?;
        let mut data = Vec::with_capacity(self.data.len());
        for (idx, (&a, &b)) in self.data.iter().zip(divisor.data.iter()).enumerate() {
            if b == 0.0 {
                return Err(MatrixError::ZeroDivisor {
                    row: idx / self.cols,
                    col: idx % self.cols,
                });
            }
            data.push(a / b);
        }
        Matrix::new(self.rows, self.cols, data)
    }

    /// 所有元素乘以标量
    pub fn scale(&self, factor: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v * factor).collect(),
        }
    }

    // ==========================================
    // 形状变换
    // ==========================================

    /// 单行矩阵向下复制为 target_rows 行
    ///
    /// 红线: 来源必须恰好只有一行, 禁止隐式多行广播
    pub fn broadcast_rows(&self, target_rows: usize) -> MatrixResult<Matrix> {
        if self.rows != 1 {
            return Err(MatrixError::BroadcastSourceNotSingleRow { rows: self.rows });
        }
        if target_rows == 0 {
            return Err(MatrixError::ZeroDimension {
                rows: target_rows,
                cols: self.cols,
            });
        }
        let mut data = Vec::with_capacity(target_rows * self.cols);
        for _ in 0..target_rows {
            data.extend_from_slice(&self.data);
        }
        Matrix::new(target_rows, self.cols, data)
    }

    /// 按行堆叠若干矩阵（列数必须一致）
    pub fn vstack(parts: &[&Matrix]) -> MatrixResult<Matrix> {
        let first = parts.first().ok_or(MatrixError::EmptyStack)?;
        let cols = first.cols;
        let mut rows = 0;
        let mut data = Vec::new();
        for part in parts {
            if part.cols != cols {
                return Err(MatrixError::DimensionMismatch {
                    expected_rows: part.rows,
                    expected_cols: cols,
                    actual_rows: part.rows,
                    actual_cols: part.cols,
                });
            }
            rows += part.rows;
            data.extend_from_slice(&part.data);
        }
        Matrix::new(rows, cols, data)
    }

    // ==========================================
    // 列向归约
    // ==========================================

    /// 每列的最小值
    pub fn column_mins(&self) -> Vec<f64> {
        let mut mins = vec![f64::INFINITY; self.cols];
        for row in 0..self.rows {
            for col in 0..self.cols {
                let v = self.data[row * self.cols + col];
                if v < mins[col] {
                    mins[col] = v;
                }
            }
        }
        mins
    }

    /// 每列所有行之和
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.cols];
        for row in 0..self.rows {
            for col in 0..self.cols {
                sums[col] += self.data[row * self.cols + col];
            }
        }
        sums
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_data_length() {
        let result = Matrix::new(2, 2, vec![1.0, 2.0, 3.0]);
        assert_eq!(
            result,
            Err(MatrixError::DataLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            Matrix::new(0, 3, vec![]),
            Err(MatrixError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn test_elementwise_div() {
        // 测试：逐元素除法
        let a = Matrix::from_rows(vec![vec![10.0, 8.0], vec![6.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![2.0, 4.0], vec![3.0, 2.0]]).unwrap();
        let c = a.elementwise_div(&b).unwrap();
        assert_eq!(c.row(0).unwrap(), &[5.0, 2.0]);
        assert_eq!(c.row(1).unwrap(), &[2.0, 2.0]);
    }

    #[test]
    fn test_elementwise_div_zero_divisor() {
        // 测试：零除数必须报错并给出坐标
        let a = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1.0, 0.0]]).unwrap();
        assert_eq!(
            a.elementwise_div(&b),
            Err(MatrixError::ZeroDivisor { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_elementwise_div_shape_mismatch() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert!(matches!(
            a.elementwise_div(&b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_broadcast_rows() {
        // 测试：单行向下复制
        let row = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        let m = row.broadcast_rows(3).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.row(2).unwrap(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_broadcast_rows_rejects_multi_row_source() {
        // 红线：多行来源禁止隐式广播
        let m = Matrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
        assert_eq!(
            m.broadcast_rows(3),
            Err(MatrixError::BroadcastSourceNotSingleRow { rows: 2 })
        );
    }

    #[test]
    fn test_vstack() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        let stacked = Matrix::vstack(&[&a, &b]).unwrap();
        assert_eq!(stacked.rows(), 3);
        assert_eq!(stacked.row(1).unwrap(), &[3.0, 4.0]);
    }

    #[test]
    fn test_vstack_column_mismatch() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![3.0]]).unwrap();
        assert!(matches!(
            Matrix::vstack(&[&a, &b]),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_column_reductions() {
        let m = Matrix::from_rows(vec![vec![5.0, 1.0, 4.0], vec![2.0, 3.0, 4.0]]).unwrap();
        assert_eq!(m.column_mins(), vec![2.0, 1.0, 4.0]);
        assert_eq!(m.column_sums(), vec![7.0, 4.0, 8.0]);
    }

    #[test]
    fn test_set_out_of_range() {
        let mut m = Matrix::zeros(2, 2).unwrap();
        assert_eq!(
            m.set(2, 0, 1.0),
            Err(MatrixError::IndexOutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
    }
}
