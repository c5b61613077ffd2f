use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::format::FmtData;

/// Build the descriptor path for an input file:
/// `<output_dir>/<input-basename-without-extension>.xml`.
///
/// Only the final `.wav` extension is dropped; dots inside the basename are
/// kept, so `take.v1.wav` maps to `take.v1.xml`.
pub fn descriptor_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".xml");
    output_dir.join(name)
}

/// Render the XML descriptor for one file's format metadata.
///
/// The layout (element order, attribute order, 2-space indent) is part of the
/// published schema and must not change.
pub fn render_descriptor(data: &FmtData) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<xs:schema xmlns:xs=\"http://www.w3.org/2001/XMLSchema\">\n");
    xml.push_str("  <track>\n");
    xml.push_str(&format!(
        "    <element name=\"format\" type=\"xs:string\" content=\"{}\"/>\n",
        data.audio_format
    ));
    xml.push_str(&format!(
        "    <element name=\"channel_count\" type=\"xs:positiveInteger\" content=\"{}\"/>\n",
        data.channel_count
    ));
    xml.push_str(&format!(
        "    <element name=\"sampling_rate\" type=\"xs:positiveInteger\" content=\"{}\"/>\n",
        data.sampling_rate
    ));
    xml.push_str(&format!(
        "    <element name=\"bit_depth\" type=\"xs:positiveInteger\" content=\"{}\"/>\n",
        data.bit_depth
    ));
    xml.push_str(&format!(
        "    <element name=\"byte_rate\" type=\"xs:positiveInteger\" minOccurs=\"0\" content=\"{}\"/>\n",
        data.byte_rate
    ));
    xml.push_str(&format!(
        "    <element name=\"bit_rate\" type=\"xs:positiveInteger\" content=\"{}\"/>\n",
        data.bit_rate
    ));
    xml.push_str("  </track>\n");
    xml.push_str("</xs:schema>\n");
    xml
}

/// Write the descriptor for one input file.
pub fn write_descriptor(path: &Path, data: &FmtData) -> io::Result<()> {
    debug!("writing descriptor {}", path.display());
    fs::write(path, render_descriptor(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{AudioFormat, FmtData};

    fn sample_data() -> FmtData {
        FmtData {
            audio_format: AudioFormat::Pcm,
            channel_count: 2,
            sampling_rate: 44_100,
            byte_rate: 176_400,
            bit_depth: 16,
            bit_rate: 1_411_200,
        }
    }

    #[test]
    fn renders_the_published_schema_exactly() {
        let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<xs:schema xmlns:xs=\"http://www.w3.org/2001/XMLSchema\">
  <track>
    <element name=\"format\" type=\"xs:string\" content=\"PCM\"/>
    <element name=\"channel_count\" type=\"xs:positiveInteger\" content=\"2\"/>
    <element name=\"sampling_rate\" type=\"xs:positiveInteger\" content=\"44100\"/>
    <element name=\"bit_depth\" type=\"xs:positiveInteger\" content=\"16\"/>
    <element name=\"byte_rate\" type=\"xs:positiveInteger\" minOccurs=\"0\" content=\"176400\"/>
    <element name=\"bit_rate\" type=\"xs:positiveInteger\" content=\"1411200\"/>
  </track>
</xs:schema>
";
        assert_eq!(render_descriptor(&sample_data()), expected);
    }

    #[test]
    fn compressed_format_renders_as_compressed() {
        let mut data = sample_data();
        data.audio_format = AudioFormat::Compressed;
        assert!(render_descriptor(&data)
            .contains("<element name=\"format\" type=\"xs:string\" content=\"Compressed\"/>"));
    }

    #[test]
    fn descriptor_path_swaps_extension() {
        let path = descriptor_path(Path::new("/out/run1"), Path::new("/in/track.wav"));
        assert_eq!(path, PathBuf::from("/out/run1/track.xml"));
    }

    #[test]
    fn descriptor_path_keeps_dots_inside_the_basename() {
        let path = descriptor_path(Path::new("/out/run1"), Path::new("/in/take.v1.wav"));
        assert_eq!(path, PathBuf::from("/out/run1/take.v1.xml"));
    }
}
