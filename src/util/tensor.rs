
//! Rudimentary n-dimensional array which enforces consistency between
//! its shape and the length of its data.

use thiserror::Error;

/// A `Tensor<T>` is a flat, row-major vector of `T` together with a
/// shape. The product of the shape's extents always equals the number
/// of elements. A tensor with an empty shape is a scalar holding
/// exactly one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T> {
  shape: Vec<usize>,
  data: Vec<T>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Shape {shape:?} does not hold {len} elements")]
pub struct ShapeError {
  pub shape: Vec<usize>,
  pub len: usize,
}

impl<T> Tensor<T> {
  pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self, ShapeError> {
    match element_count(&shape) {
      Some(n) if n == data.len() => Ok(Tensor { shape, data }),
      _ => Err(ShapeError { len: data.len(), shape }),
    }
  }

  /// A one-dimensional tensor.
  pub fn vector(data: Vec<T>) -> Self {
    Tensor { shape: vec![data.len()], data }
  }

  /// A two-dimensional tensor, given in row-major order. Every row
  /// must have the same length.
  pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    let ragged = rows.iter().any(|row| row.len() != width);
    let data: Vec<T> = rows.into_iter().flatten().collect();
    if ragged {
      return Err(ShapeError { shape: vec![height, width], len: data.len() });
    }
    Tensor::new(vec![height, width], data)
  }

  pub fn shape(&self) -> &[usize] {
    &self.shape
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// The elements in row-major order.
  pub fn as_flat(&self) -> &[T] {
    &self.data
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
    self.data.iter()
  }

  pub fn map<F, U>(self, f: F) -> Tensor<U>
  where F: FnMut(T) -> U {
    Tensor {
      shape: self.shape,
      data: self.data.into_iter().map(f).collect(),
    }
  }

  /// Applies a fallible function to every element by reference,
  /// stopping at the first error.
  pub fn try_map_ref<F, U, E>(&self, f: F) -> Result<Tensor<U>, E>
  where F: FnMut(&T) -> Result<U, E> {
    Ok(Tensor {
      shape: self.shape.clone(),
      data: self.data.iter().map(f).collect::<Result<_, _>>()?,
    })
  }

  /// Iterates over every element together with its multi-index, in
  /// row-major order.
  pub fn indexed_iter(&self) -> impl Iterator<Item = (Vec<usize>, &T)> + '_ {
    self.data.iter()
      .enumerate()
      .map(|(i, value)| (self.unravel(i), value))
  }

  /// Converts a row-major flat index into a multi-index.
  pub fn unravel(&self, mut flat: usize) -> Vec<usize> {
    let mut index = vec![0; self.shape.len()];
    for (slot, extent) in index.iter_mut().zip(&self.shape).rev() {
      if *extent > 0 {
        *slot = flat % extent;
        flat /= extent;
      }
    }
    index
  }
}

impl<T> From<Vec<T>> for Tensor<T> {
  fn from(data: Vec<T>) -> Self {
    Tensor::vector(data)
  }
}

fn element_count(shape: &[usize]) -> Option<usize> {
  shape.iter().try_fold(1usize, |acc, extent| acc.checked_mul(*extent))
}
