use crate::tensor::Tensor;
use std::fmt;

/// 超过该行/列数时只展示首尾各3行/列
const MAX_SHOWN: usize = 6;
const EDGE_SHOWN: usize = 3;

/// 需要展示的下标，`None`代表省略号
fn shown_indices(len: usize) -> Vec<Option<usize>> {
    if len > MAX_SHOWN {
        (0..EDGE_SHOWN)
            .map(Some)
            .chain(std::iter::once(None))
            .chain((len - EDGE_SHOWN..len).map(Some))
            .collect()
    } else {
        (0..len).map(Some).collect()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [rows, cols] = self.shape();
        let col_indices = shown_indices(cols);

        write!(f, "[")?;
        for (i, row) in shown_indices(rows).into_iter().enumerate() {
            if i != 0 {
                write!(f, ",\n ")?;
            }
            let Some(r) = row else {
                write!(f, "...")?;
                continue;
            };
            write!(f, "[")?;
            for (j, col) in col_indices.iter().enumerate() {
                if j != 0 {
                    write!(f, ", ")?;
                }
                match col {
                    Some(c) => write!(f, "{:8.4}", self.data[[r, *c]])?,
                    None => write!(f, "   ...  ")?,
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")?;
        writeln!(f, "\n形状: {:?}", self.shape())
    }
}
