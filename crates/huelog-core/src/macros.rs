//! Code generation for message variants and fixed level methods.

/// Declares a message variant and the callbacks struct that fills its fields.
///
/// The generated struct has public `level` and `content` fields followed by
/// the declared fields, derives `Debug` and `Clone`, and implements
/// [`Message`](crate::Message) with `Fields` set to a tuple of the declared
/// field types. The callbacks struct holds one boxed producer per field and
/// evaluates them in declaration order.
///
/// Attributes on the struct and on each field are passed through, so
/// `#[derive(serde::Serialize)]` and field-level serde attributes work.
///
/// ```
/// use huelog_core::{define_message, Callbacks, Message, INFO};
///
/// define_message! {
///     /// A message tagged with the subsystem that logged it.
///     pub struct TopicMessage<String> with TopicCallbacks {
///         topic: String,
///     }
/// }
///
/// let callbacks = TopicCallbacks { topic: Box::new(|| "db".to_string()) };
/// let message = TopicMessage::assemble(INFO, "connected".into(), callbacks.evaluate());
/// assert_eq!(message.topic, "db");
/// ```
#[macro_export]
macro_rules! define_message {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident<$content:ty> with $callbacks:ident {
            $( $(#[$fmeta:meta])* $field:ident : $fty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            pub level: $crate::Level,
            pub content: $content,
            $( $(#[$fmeta])* pub $field: $fty, )+
        }

        impl $crate::Message for $name {
            type Content = $content;
            type Fields = ( $( $fty, )+ );

            fn assemble(level: $crate::Level, content: $content, fields: Self::Fields) -> Self {
                let ( $( $field, )+ ) = fields;
                Self { level, content, $( $field, )+ }
            }

            fn level(&self) -> &$crate::Level {
                &self.level
            }

            fn content(&self) -> &$content {
                &self.content
            }
        }

        #[doc = concat!("Field producers for [`", stringify!($name), "`].")]
        $vis struct $callbacks {
            $(
                pub $field: ::std::boxed::Box<
                    dyn Fn() -> $fty + ::std::marker::Send + ::std::marker::Sync,
                >,
            )+
        }

        impl $crate::Callbacks<( $( $fty, )+ )> for $callbacks {
            fn evaluate(&self) -> ( $( $fty, )+ ) {
                ( $( (self.$field)(), )+ )
            }

            fn names(&self) -> &'static [&'static str] {
                &[ $( stringify!($field) ),+ ]
            }
        }

        impl ::std::fmt::Debug for $callbacks {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($callbacks))
                    .field("fields", &$crate::Callbacks::names(self))
                    .finish()
            }
        }
    };
}

/// Generates a trait of fixed per-level methods, implemented for every
/// [`Logger`](crate::Logger).
///
/// Use it when the level set is known at compile time; each method is
/// equivalent to `logger.write(&LEVEL, content)`, so calling it on a logger
/// configured without that level returns [`Error::UnknownLevel`](crate::Error::UnknownLevel).
///
/// ```
/// use huelog_core::{level_methods, Level, Logger};
///
/// const OK: Level = Level::new_static("Ok", 0);
/// const ERR: Level = Level::new_static("Err", 1);
///
/// level_methods! {
///     pub trait OkMethods {
///         ok => OK,
///         err => ERR,
///     }
/// }
///
/// let logger = Logger::builder().levels(vec![OK, ERR]).build().unwrap();
/// logger.ok("fine".to_string()).unwrap();
/// ```
#[macro_export]
macro_rules! level_methods {
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident {
            $( $method:ident => $level:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis trait $name<M: $crate::Message> {
            $(
                #[doc = concat!("Writes `content` at `", stringify!($level), "`.")]
                fn $method(&self, content: M::Content) -> $crate::Result<()>;
            )+
        }

        impl<M: $crate::Message> $name<M> for $crate::Logger<M> {
            $(
                fn $method(&self, content: M::Content) -> $crate::Result<()> {
                    self.write(&$level, content)
                }
            )+
        }
    };
}
