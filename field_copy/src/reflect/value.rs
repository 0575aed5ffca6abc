//! `Reflect` for scalars, strings and the two indirection types

use std::any::Any;

use super::{Kind, Reflect, ReflectMut, ReflectRef, assign_cloned};

macro_rules! impl_reflect_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }

                fn type_name(&self) -> &'static str {
                    std::any::type_name::<Self>()
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn Any {
                    self
                }

                fn clone_reflect(&self) -> Box<dyn Reflect> {
                    Box::new(self.clone())
                }

                fn assign(&mut self, value: &dyn Reflect) -> bool {
                    assign_cloned(self, value)
                }

                fn reflect_ref(&self) -> ReflectRef<'_> {
                    ReflectRef::Value(self)
                }

                fn reflect_mut(&mut self) -> ReflectMut<'_> {
                    ReflectMut::Value(self)
                }
            }
        )*
    };
}

impl_reflect_value!(
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    i128 => Int128,
    isize => Isize,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    u128 => Uint128,
    usize => Usize,
    f32 => Float32,
    f64 => Float64,
    char => Char,
    String => String,
    () => Unit,
);

// `None` is the nil handle.
impl<T> Reflect for Option<T>
where
    T: Reflect + Clone,
{
    fn kind(&self) -> Kind {
        Kind::Option
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_reflect(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    fn assign(&mut self, value: &dyn Reflect) -> bool {
        assign_cloned(self, value)
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self.as_ref().map(|inner| inner as &dyn Reflect))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self.as_mut().map(|inner| inner as &mut dyn Reflect))
    }
}

impl<T> Reflect for Box<T>
where
    T: Reflect + Clone,
{
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_reflect(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    fn assign(&mut self, value: &dyn Reflect) -> bool {
        assign_cloned(self, value)
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(Some(&**self))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(Some(&mut **self))
    }
}
