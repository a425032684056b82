/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The text command surface
//!
//! Scripts are whitespace separated tokens, every command is a fixed
//! arity word followed by its arguments, so newlines carry no
//! meaning and one command may span lines.
//!
//! ```text
//! load <filepath> <name>
//! save <filepath> <name>
//! brighten <increment> <name> <dest>
//! red-component <name> <dest>        (also green, blue, value,
//!                                     intensity and luma)
//! horizontal-flip <name> <dest>
//! vertical-flip <name> <dest>
//! blur <name> <dest>
//! sharpen <name> <dest>
//! greyscale <name> <dest>
//! sepia <name> <dest>
//! q | quit
//! ```
//!
//! Execution is fail fast, the first command that cannot be parsed
//! or executed stops the script with an error and every binding made
//! before it stays in the store.
use kuva_core::channel::GreyMethod;
use log::{error, info, trace};

use crate::codecs;
use crate::errors::ImageErrors;
use crate::filter::Filter;
use crate::store::ImageStore;
use crate::transform::Transform;

/// Convolution presets reachable from the command surface
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FilterKind
{
    Blur,
    Sharpen
}

/// Color transform presets reachable from the command surface
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransformKind
{
    Greyscale,
    Sepia
}

/// A single parsed command
///
/// `name` always refers to an existing binding, `dest` is where the
/// result lands, the two may coincide to replace an image in place.
#[derive(Clone, Debug, PartialEq)]
pub enum Command
{
    /// Read an image from disk and bind it
    Load
    {
        path: String, name: String
    },
    /// Write a bound image to disk
    Save
    {
        path: String, name: String
    },
    /// Add a signed increment to every channel
    Brighten
    {
        increment: i32,
        name:      String,
        dest:      String
    },
    /// Mirror along the vertical axis
    FlipHorizontal
    {
        name: String, dest: String
    },
    /// Mirror along the horizontal axis
    FlipVertical
    {
        name: String, dest: String
    },
    /// Greyscale by a single component or derived scalar
    Component
    {
        method: GreyMethod,
        name:   String,
        dest:   String
    },
    /// Convolve with a preset kernel
    Filter
    {
        kind: FilterKind,
        name: String,
        dest: String
    },
    /// Map every pixel through a preset color matrix
    Transform
    {
        kind: TransformKind,
        name: String,
        dest: String
    }
}

fn next_arg<'b, I>(tokens: &mut I, command: &str) -> Result<String, ImageErrors>
where
    I: Iterator<Item = &'b str>
{
    tokens.next().map(str::to_string).ok_or_else(|| {
        ImageErrors::MalformedCommand(format!("not enough arguments to `{command}`"))
    })
}

impl Command
{
    /// Parse one command from its leading word and the token stream
    ///
    /// `tokens` must yield the arguments following `word`, the
    /// command consumes exactly as many as its arity needs. Unknown
    /// words and missing or malformed arguments are errors.
    pub fn from_tokens<'b, I>(word: &str, tokens: &mut I) -> Result<Command, ImageErrors>
    where
        I: Iterator<Item = &'b str>
    {
        match word
        {
            "load" => Ok(Command::Load {
                path: next_arg(tokens, word)?,
                name: next_arg(tokens, word)?
            }),
            "save" => Ok(Command::Save {
                path: next_arg(tokens, word)?,
                name: next_arg(tokens, word)?
            }),
            "brighten" =>
            {
                let argument = next_arg(tokens, word)?;
                let increment = argument.parse::<i32>().map_err(|_| {
                    ImageErrors::MalformedCommand(format!(
                        "increment `{argument}` is not a number"
                    ))
                })?;

                Ok(Command::Brighten {
                    increment,
                    name: next_arg(tokens, word)?,
                    dest: next_arg(tokens, word)?
                })
            }
            "horizontal-flip" => Ok(Command::FlipHorizontal {
                name: next_arg(tokens, word)?,
                dest: next_arg(tokens, word)?
            }),
            "vertical-flip" => Ok(Command::FlipVertical {
                name: next_arg(tokens, word)?,
                dest: next_arg(tokens, word)?
            }),
            "blur" | "sharpen" =>
            {
                let kind = if word == "blur"
                {
                    FilterKind::Blur
                }
                else
                {
                    FilterKind::Sharpen
                };

                Ok(Command::Filter {
                    kind,
                    name: next_arg(tokens, word)?,
                    dest: next_arg(tokens, word)?
                })
            }
            "greyscale" | "sepia" =>
            {
                let kind = if word == "greyscale"
                {
                    TransformKind::Greyscale
                }
                else
                {
                    TransformKind::Sepia
                };

                Ok(Command::Transform {
                    kind,
                    name: next_arg(tokens, word)?,
                    dest: next_arg(tokens, word)?
                })
            }
            _ =>
            {
                // "red-component", "luma-component" and friends all
                // parse their derivation from the word itself
                if let Some(method_name) = word.strip_suffix("-component")
                {
                    let method = method_name.parse::<GreyMethod>()?;

                    return Ok(Command::Component {
                        method,
                        name: next_arg(tokens, word)?,
                        dest: next_arg(tokens, word)?
                    });
                }

                Err(ImageErrors::MalformedCommand(format!(
                    "unknown command `{word}`"
                )))
            }
        }
    }

    /// The command's word as it appears in scripts
    #[must_use]
    pub fn name(&self) -> &'static str
    {
        match self
        {
            Command::Load { .. } => "load",
            Command::Save { .. } => "save",
            Command::Brighten { .. } => "brighten",
            Command::FlipHorizontal { .. } => "horizontal-flip",
            Command::FlipVertical { .. } => "vertical-flip",
            Command::Component { method, .. } => match method
            {
                GreyMethod::Red => "red-component",
                GreyMethod::Green => "green-component",
                GreyMethod::Blue => "blue-component",
                GreyMethod::Value => "value-component",
                GreyMethod::Intensity => "intensity-component",
                GreyMethod::Luma => "luma-component"
            },
            Command::Filter {
                kind: FilterKind::Blur,
                ..
            } => "blur",
            Command::Filter {
                kind: FilterKind::Sharpen,
                ..
            } => "sharpen",
            Command::Transform {
                kind: TransformKind::Greyscale,
                ..
            } => "greyscale",
            Command::Transform {
                kind: TransformKind::Sepia,
                ..
            } => "sepia"
        }
    }

    /// Execute the command against the store
    ///
    /// Edit commands read `name`, compute and bind the result under
    /// `dest` without touching the source binding.
    pub fn execute(self, store: &mut ImageStore) -> Result<(), ImageErrors>
    {
        match self
        {
            Command::Load { path, name } =>
            {
                let image = codecs::read_image(&path)?;

                info!("Loaded `{path}` into `{name}`");
                store.insert(&name, image);
            }
            Command::Save { path, name } =>
            {
                let image = store.get(&name)?;

                codecs::write_image(image, &path)?;
                info!("Saved `{name}` to `{path}`");
            }
            Command::Brighten {
                increment,
                name,
                dest
            } =>
            {
                let image = store.get(&name)?.brighten(increment);

                store.insert(&dest, image);
            }
            Command::FlipHorizontal { name, dest } =>
            {
                let image = store.get(&name)?.flip_horizontal();

                store.insert(&dest, image);
            }
            Command::FlipVertical { name, dest } =>
            {
                let image = store.get(&name)?.flip_vertical();

                store.insert(&dest, image);
            }
            Command::Component { method, name, dest } =>
            {
                let image = store.get(&name)?.to_greyscale(method);

                store.insert(&dest, image);
            }
            Command::Filter { kind, name, dest } =>
            {
                let filter = match kind
                {
                    FilterKind::Blur => Filter::blur(),
                    FilterKind::Sharpen => Filter::sharpen()
                };
                let image = store.get(&name)?.apply_filter(&filter)?;

                store.insert(&dest, image);
            }
            Command::Transform { kind, name, dest } =>
            {
                let transform = match kind
                {
                    TransformKind::Greyscale => Transform::greyscale(),
                    TransformKind::Sepia => Transform::sepia()
                };
                let image = store.get(&name)?.apply_transform(&transform);

                store.insert(&dest, image);
            }
        }

        Ok(())
    }
}

/// Run a whole script against the store
///
/// Tokens are consumed one command at a time until the source is
/// exhausted or a `q`/`quit` word is reached, which ends the run
/// successfully. Case does not matter for the quit words.
///
/// The first parse or execution error stops the run, bindings made
/// by earlier commands remain in the store.
pub fn run_script(source: &str, store: &mut ImageStore) -> Result<(), ImageErrors>
{
    let mut tokens = source.split_whitespace();

    while let Some(word) = tokens.next()
    {
        if word.eq_ignore_ascii_case("q") || word.eq_ignore_ascii_case("quit")
        {
            trace!("Quit requested, stopping the script");
            return Ok(());
        }

        let command = match Command::from_tokens(word, &mut tokens)
        {
            Ok(command) => command,
            Err(e) =>
            {
                error!("Could not parse command `{word}`");
                return Err(e);
            }
        };

        trace!("Running `{}`", command.name());

        if let Err(e) = command.execute(store)
        {
            error!("Command `{word}` failed");
            return Err(e);
        }
    }

    Ok(())
}
