use std::io::{self, BufRead, Write};

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(buf.trim().to_string())
}

/// Asks until the answer is an unsigned integer within `min..=max`.
pub fn read_in_range<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: u32,
    max: u32,
) -> io::Result<u32> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let answer = read_line(input)?;
        if answer.starts_with('-') {
            writeln!(
                output,
                "Invalid input. Please enter a positive integer between {min} and {max}."
            )?;
            continue;
        }
        if !answer.is_empty() && answer.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = answer.parse::<u32>() {
                if (min..=max).contains(&value) {
                    return Ok(value);
                }
            }
        }
        writeln!(
            output,
            "Invalid input. Please enter an integer between {min} and {max}."
        )?;
    }
}

/// Asks until the answer is `y` or `n`, either case.
pub fn read_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<bool> {
    write!(output, "{prompt}")?;
    output.flush()?;
    loop {
        match read_line(input)?.as_str() {
            "y" | "Y" => return Ok(true),
            "n" | "N" => return Ok(false),
            _ => {
                write!(output, "Invalid input. Please enter 'y' for yes or 'n' for no: ")?;
                output.flush()?;
            }
        }
    }
}
