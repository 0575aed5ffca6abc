//! Element-wise collection copy with destination growth

use error_stack::Report;

use super::Copier;
use crate::error::{Error, Result};
use crate::reflect::Collection;
use crate::support::StackResultExt;

impl Copier {
    /// Copy `source[i]` into `destination[i]` for every source index.
    ///
    /// The length requirement is checked before anything is written. When element `i`
    /// fails, elements `0..i` keep their copied values and a growable destination is
    /// shrunk back to its original length.
    pub(super) fn copy_collection(
        &self,
        destination: &mut dyn Collection,
        source: &dyn Collection,
    ) -> Result<()> {
        let source_len = source.len();
        let original_len = destination.len();

        let accepted = if destination.is_growable() {
            self.options
                .accepts_growable_length(original_len, source_len)
        } else {
            self.options.accepts_fixed_length(original_len, source_len)
        };
        if !accepted {
            return Err(Report::new(Error::LengthMismatch {
                source_len,
                destination_len: original_len,
            })
            .attach(format!(
                "Destination: `{}` ({})",
                destination.type_name(),
                if destination.is_growable() {
                    format!("growth policy {}", self.options.growth)
                } else {
                    format!("fixed-length policy {}", self.options.fixed_length)
                }
            )));
        }

        tracing::debug!(
            source_len,
            destination_len = original_len,
            element = destination.element_type_name(),
            "copying collection"
        );

        for index in 0..source_len {
            if let Err(report) = self.copy_element(destination, source, index) {
                destination.truncate(original_len);
                return Err(report.attach(format!(
                    "Copied {index} of {source_len} elements before the failure"
                )));
            }
        }

        destination.truncate(source_len);
        Ok(())
    }

    fn copy_element(
        &self,
        destination: &mut dyn Collection,
        source: &dyn Collection,
        index: usize,
    ) -> Result<()> {
        if index >= destination.len() && !destination.push_default() {
            return Err(Report::new(Error::LengthMismatch {
                source_len:      source.len(),
                destination_len: destination.len(),
            }));
        }

        let (Some(target), Some(value)) = (destination.element_mut(index), source.element(index))
        else {
            return Err(Report::new(Error::internal(format!(
                "element index {index} out of range"
            ))));
        };

        self.copy_value(target, value)
            .wrapf(format_args!("element {index}"))
    }
}
